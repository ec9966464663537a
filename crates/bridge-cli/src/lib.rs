pub mod logging;
pub mod par_utils;
