pub mod aqi;
pub mod forecast;
pub mod view_model;
pub mod window;
