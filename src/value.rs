mod decimal;
mod from;
mod own_list;
mod own_struct;
mod own_value;

pub use decimal::*;
pub use own_list::*;
pub use own_struct::*;
pub use own_value::*;
