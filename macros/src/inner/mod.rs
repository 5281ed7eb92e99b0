// Macros used by tola-concepts itself

pub mod peano;
