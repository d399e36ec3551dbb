pub mod criteria;
pub mod errors;
pub mod labels;
pub mod nutrients;
pub mod profiles;
pub mod tables;
pub mod thresholds;
pub mod weights;
