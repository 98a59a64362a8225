use crate::core::domain::Identifiable;

pub mod model;

// Book exposes the catalog attributes shared by stored and transferred records
pub trait Book: Identifiable {
    fn name(&self) -> &str;
    fn author(&self) -> &str;
    fn publication(&self) -> &str;
    fn price(&self) -> f64;
}
