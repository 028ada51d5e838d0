pub use analysis::*;
pub use area::*;
pub use cards::*;
pub use categorize::*;
pub use opponent::*;
pub use protocol::*;
pub use scoring::*;
pub use species_set::*;
pub use visualization::*;

mod analysis;
#[cfg(test)]
mod arbitrary;
mod area;
mod cards;
mod categorize;
mod opponent;
mod protocol;
mod scoring;
mod species_set;
mod visualization;
