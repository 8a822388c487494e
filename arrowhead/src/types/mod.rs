mod enums;

pub use enums::Direction;
