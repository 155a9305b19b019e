pub mod deserializers;
pub mod pagination;
pub mod validation;
