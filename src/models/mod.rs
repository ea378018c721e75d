pub mod recipe;
pub mod user;
pub mod meal_plan;

pub use recipe::*;
pub use user::*;
pub use meal_plan::*;
