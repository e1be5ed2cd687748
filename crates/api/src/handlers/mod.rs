pub mod availability;
pub mod shipping;
