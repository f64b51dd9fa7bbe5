use thiserror::Error;

/// Reasons a goal plan cannot be computed from the raw inputs.
///
/// Every variant is a user-correctable input problem; the `Display` text is
/// the guidance shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, insira um valor de meta mensal válido e positivo.")]
    InvalidGoal,

    #[error("Por favor, insira um valor por venda válido e positivo.")]
    InvalidSaleValue,

    #[error("Por favor, insira um tempo por venda válido e positivo.")]
    InvalidTimePerSale,

    #[error("Datas inválidas. Por favor, verifique as datas inseridas.")]
    InvalidDate,

    #[error("A data de início não pode ser posterior à data de fim.")]
    DateRangeInverted,

    #[error("O período selecionado não resultou em meses para cálculo.")]
    EmptyPeriod,

    #[error("O período selecionado não possui dias úteis para cálculo.")]
    NoBusinessDays,
}

impl ValidationError {
    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidGoal => "InvalidGoal",
            ValidationError::InvalidSaleValue => "InvalidSaleValue",
            ValidationError::InvalidTimePerSale => "InvalidTimePerSale",
            ValidationError::InvalidDate => "InvalidDate",
            ValidationError::DateRangeInverted => "DateRangeInverted",
            ValidationError::EmptyPeriod => "EmptyPeriod",
            ValidationError::NoBusinessDays => "NoBusinessDays",
        }
    }
}
