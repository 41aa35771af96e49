//! Page components, one per route.

mod agencies;
mod appointments;
mod candidate_form;
mod cities;
mod countries;
mod create_user;
mod dashboard;
mod hospital_dashboard;
mod hospitals;
mod login;
mod medical_report;
mod payments;
mod positions;
mod register_admin;
mod users;

pub use agencies::Agencies;
pub use appointments::Appointments;
pub use candidate_form::CandidateForm;
pub use cities::Cities;
pub use countries::Countries;
pub use create_user::CreateUser;
pub use dashboard::Dashboard;
pub use hospital_dashboard::HospitalDashboard;
pub use hospitals::Hospitals;
pub use login::Login;
pub use medical_report::MedicalReports;
pub use payments::Payments;
pub use positions::Positions;
pub use register_admin::RegisterAdmin;
pub use users::Users;
