use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::bank_region;

use crate::crud::{required, CrudService, Dto};
use crate::dto::BankRegionDto;
use crate::errors::ServiceResult;
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::DivisionService;

pub struct RegionService {
    crud: CrudService<BankRegionDto>,
    divisions: Arc<DivisionService>,
}

impl RegionService {
    pub fn new(repo: SharedRepository<bank_region::Model>, divisions: Arc<DivisionService>) -> Self {
        Self { crud: CrudService::new(repo), divisions }
    }

    pub async fn verify_region_in_division(&self, division_id: Uuid, region_id: Uuid) -> ServiceResult<bank_region::Model> {
        let (_, region) = self
            .crud
            .verify_owned_by(self.divisions.crud(), division_id, region_id, |r| Some(r.division_id))
            .await?;
        Ok(region)
    }

    /// Region under `/banks/{bank_id}/divisions/{division_id}`.
    async fn verify_path(&self, bank_id: Uuid, division_id: Uuid, region_id: Uuid) -> ServiceResult<bank_region::Model> {
        self.divisions.verify_division_in_bank(bank_id, division_id).await?;
        self.verify_region_in_division(division_id, region_id).await
    }

    /// Bank that owns the region through its division.
    pub async fn bank_of_region(&self, region_id: Uuid) -> ServiceResult<Uuid> {
        let region = self.crud.require(region_id).await?;
        let division = self.divisions.crud().require(region.division_id).await?;
        Ok(division.bank_id)
    }

    async fn save(&self, existing: Option<&bank_region::Model>, dto: BankRegionDto) -> ServiceResult<BankRegionDto> {
        let division_id = required(dto.division_id, "divisionId")?;
        self.divisions.crud().require(division_id).await?;
        let criteria = FilterCriteria::new()
            .scoped_to("division_id", division_id)
            .where_eq("code", dto.code.as_str());
        self.crud
            .ensure_unique(criteria, existing.map(|r| r.id), || {
                format!("region with code {} already exists in division {}", dto.code, division_id)
            })
            .await?;
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_bank_regions(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BankRegionDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(division_id = ?dto.division_id, code = %dto.code))]
    pub async fn create_bank_region(&self, dto: BankRegionDto) -> ServiceResult<BankRegionDto> {
        let created = self.save(None, dto).await?;
        info!(region_id = ?created.id, "region_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(region_id = %id))]
    pub async fn update_bank_region(&self, id: Uuid, dto: BankRegionDto) -> ServiceResult<BankRegionDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!("region_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(region_id = %id))]
    pub async fn delete_bank_region(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("region_deleted");
        Ok(())
    }

    pub async fn get_bank_region_by_id(&self, id: Uuid) -> ServiceResult<BankRegionDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_bank_regions_for_division(
        &self,
        bank_id: Uuid,
        division_id: Uuid,
        criteria: &FilterCriteria,
    ) -> ServiceResult<Page<BankRegionDto>> {
        self.divisions.verify_division_in_bank(bank_id, division_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("division_id", division_id)).await
    }

    pub async fn create_bank_region_for_division(&self, bank_id: Uuid, division_id: Uuid, mut dto: BankRegionDto) -> ServiceResult<BankRegionDto> {
        self.divisions.verify_division_in_bank(bank_id, division_id).await?;
        dto.division_id = Some(division_id);
        self.create_bank_region(dto).await
    }

    #[instrument(skip(self, dto), fields(bank_id = %bank_id, division_id = %division_id, region_id = %region_id))]
    pub async fn update_bank_region_for_division(
        &self,
        bank_id: Uuid,
        division_id: Uuid,
        region_id: Uuid,
        mut dto: BankRegionDto,
    ) -> ServiceResult<BankRegionDto> {
        let existing = self.verify_path(bank_id, division_id, region_id).await?;
        dto.division_id = Some(division_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!("region_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(bank_id = %bank_id, division_id = %division_id, region_id = %region_id))]
    pub async fn delete_bank_region_for_division(&self, bank_id: Uuid, division_id: Uuid, region_id: Uuid) -> ServiceResult<()> {
        self.verify_path(bank_id, division_id, region_id).await?;
        self.crud.delete(region_id).await?;
        info!("region_deleted");
        Ok(())
    }

    pub async fn get_bank_region_by_id_for_division(&self, bank_id: Uuid, division_id: Uuid, region_id: Uuid) -> ServiceResult<BankRegionDto> {
        self.verify_path(bank_id, division_id, region_id).await.map(BankRegionDto::from_model)
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::BankRegionDto;
    use crate::errors::ServiceError;
    use crate::services::fixtures::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn region_under_wrong_division_is_not_found() {
        let s = services();
        let bank_id = bank(&s, "B").await.id.unwrap();
        let north = division(&s, bank_id, "NORTH").await.id.unwrap();
        let south = division(&s, bank_id, "SOUTH").await.id.unwrap();
        let region_id = region(&s, north, "R1").await.id.unwrap();

        let ok = s.regions.get_bank_region_by_id_for_division(bank_id, north, region_id).await.unwrap();
        assert_eq!(ok.id, Some(region_id));

        let err = s.regions.get_bank_region_by_id_for_division(bank_id, south, region_id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Region not found for division with ID: {}", south));
    }

    #[tokio::test]
    async fn deep_path_checks_division_bank_first() {
        let s = services();
        let a = bank(&s, "A").await.id.unwrap();
        let b = bank(&s, "B").await.id.unwrap();
        let div = division(&s, a, "D").await.id.unwrap();
        let region_id = region(&s, div, "R").await.id.unwrap();
        let err = s.regions.get_bank_region_by_id_for_division(b, div, region_id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Division not found for bank with ID: {}", b));
    }

    #[tokio::test]
    async fn missing_region_reports_its_id() {
        let s = services();
        let bank_id = bank(&s, "B").await.id.unwrap();
        let div = division(&s, bank_id, "D").await.id.unwrap();
        let missing = Uuid::new_v4();
        let err = s.regions.delete_bank_region_for_division(bank_id, div, missing).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Region not found with ID: {}", missing));
    }

    #[tokio::test]
    async fn nested_crud_round_trip() {
        let s = services();
        let bank_id = bank(&s, "B").await.id.unwrap();
        let div = division(&s, bank_id, "D").await.id.unwrap();
        let created = s
            .regions
            .create_bank_region_for_division(bank_id, div, BankRegionDto { code: "N".into(), name: "North".into(), ..Default::default() })
            .await
            .unwrap();
        let id = created.id.unwrap();
        assert_eq!(created.division_id, Some(div));
        assert_eq!(s.regions.bank_of_region(id).await.unwrap(), bank_id);

        let renamed = BankRegionDto { code: "N".into(), name: "Far North".into(), ..Default::default() };
        let updated = s.regions.update_bank_region_for_division(bank_id, div, id, renamed).await.unwrap();
        assert_eq!(updated.name, "Far North");

        s.regions.delete_bank_region_for_division(bank_id, div, id).await.unwrap();
        assert!(matches!(s.regions.get_bank_region_by_id(id).await, Err(ServiceError::NotFound(_))));
    }
}
