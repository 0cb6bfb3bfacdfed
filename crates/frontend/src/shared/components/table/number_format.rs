//! Утилиты форматирования чисел для таблиц

/// Форматирует число с указанным количеством знаков после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(40.0, 2);
/// assert_eq!(formatted, "40.00");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    format!("{:.*}", decimals as usize, value)
}

/// Форматирует денежное значение с 2 знаками после точки
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Денежное значение в реалах для сводки
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_brl;
///
/// assert_eq!(format_brl(115.0), "R$ 115.00");
/// ```
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1234.56");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-12.5), "-12.50");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1234.567");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(115.0), "R$ 115.00");
        assert_eq!(format_brl(0.0), "R$ 0.00");
    }
}
