pub mod poi;

pub use poi::{Poi, PoiList};
