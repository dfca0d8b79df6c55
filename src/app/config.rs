/// Raw text of the four input fields. Currency fields hold their formatted
/// representation while unfocused and plain digits while being edited.
pub struct InputForm {
    pub initial_capital: String,
    pub monthly_contribution: String,
    pub years: String,
    pub annual_rate: String,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            initial_capital: "10,000.00".to_owned(),
            monthly_contribution: "100.00".to_owned(),
            years: "10".to_owned(),
            annual_rate: "5.00".to_owned(),
        }
    }
}
