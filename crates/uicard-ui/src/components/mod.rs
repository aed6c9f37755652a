pub mod card;
pub mod card_frame;
pub mod html_slot;
pub mod metric_value;
pub mod plotly_chart;
