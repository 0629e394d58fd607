mod area_selector;
mod month_selection;
mod navigation;
mod search_query;

pub use area_selector::AreaSelector;
pub use month_selection::MonthSelection;
pub use navigation::Navigation;
pub use search_query::SearchQuery;
