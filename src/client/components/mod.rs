pub mod alert;
pub mod field;
pub mod guard;
pub mod navbar;
pub mod page;

pub use alert::{ErrorAlert, Spinner};
pub use field::{SelectField, TextArea, TextField};
pub use guard::{AdminLayout, ApplicantLayout, MemberLayout, RouteGuard};
pub use navbar::Navbar;
pub use page::Page;
