pub mod card;
pub mod comparison;
pub mod difficulty;
pub mod reference_list;
