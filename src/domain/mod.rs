/// Domain layer: manifest entities and the revision diff
pub mod entities;
pub mod value_objects;
