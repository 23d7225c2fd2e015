pub mod apply;
pub mod dashboard;

pub use apply::Apply;
pub use dashboard::ApplicantDashboard;
