//! Application state wiring services to the SQLite store.
//!
//! Services are generic over the repository traits; AppState pins them to
//! the concrete SQLite implementations.

use std::path::PathBuf;
use std::sync::Arc;

use hospicare_core::service::admission::AdmissionService;
use hospicare_core::service::patient::PatientService;
use hospicare_core::service::treatment::TreatmentService;
use hospicare_infra::config::resolve_data_dir;
use hospicare_infra::sqlite::admission::SqliteAdmissionRepository;
use hospicare_infra::sqlite::patient::SqlitePatientRepository;
use hospicare_infra::sqlite::pool::DatabasePool;
use hospicare_infra::sqlite::treatment::SqliteTreatmentRepository;

/// Concrete type aliases for the service generics pinned to the SQLite
/// implementations.
pub type ConcretePatientService = PatientService<SqlitePatientRepository>;
pub type ConcreteAdmissionService = AdmissionService<SqliteAdmissionRepository>;
pub type ConcreteTreatmentService = TreatmentService<SqliteTreatmentRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub patients: Arc<ConcretePatientService>,
    pub admissions: Arc<ConcreteAdmissionService>,
    pub treatments: Arc<ConcreteTreatmentService>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state in the default data directory.
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_at(resolve_data_dir()).await
    }

    /// Initialize the application state: open the store in the given data
    /// directory and wire the services.
    pub async fn init_at(data_dir: PathBuf) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("hospicare.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let patients = PatientService::new(SqlitePatientRepository::new(db_pool.clone()));
        let admissions = AdmissionService::new(SqliteAdmissionRepository::new(db_pool.clone()));
        let treatments = TreatmentService::new(SqliteTreatmentRepository::new(db_pool.clone()));

        Ok(Self {
            patients: Arc::new(patients),
            admissions: Arc::new(admissions),
            treatments: Arc::new(treatments),
            data_dir,
            db_pool,
        })
    }
}
