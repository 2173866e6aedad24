pub mod audit;
pub mod danpss;
pub mod epds;
pub mod gcs;
pub mod ipss;
pub mod lrti;
pub mod puqe;
pub mod score2;
pub mod score2_table;
pub mod westley_croup;
pub mod who5;
