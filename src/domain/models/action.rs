#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchCoordinates(f64, f64),
    Search(String),
    Suggest(String),
}
