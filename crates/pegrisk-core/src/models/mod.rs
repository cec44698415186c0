pub mod prediction;
pub mod promal;
pub mod record;
