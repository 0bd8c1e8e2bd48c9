pub mod city;
pub mod office;

pub use city::CityWithCount;
pub use office::OfficeSummary;
