pub mod chart;
pub mod console;
pub mod html;
pub mod report_model;
pub mod theme;
