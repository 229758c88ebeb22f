pub use super::destination::Entity as Destination;
pub use super::employee::Entity as Employee;
pub use super::inscription::Entity as Inscription;
pub use super::periode::Entity as Periode;
pub use super::resultat_selection::Entity as ResultatSelection;
pub use super::session::Entity as Session;
