//! Number formatting helpers for tables and KPI cards

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0.00" после округления показываем без знака
    let sign = if unsigned.chars().all(|c| c == '0' || c == '.') { "" } else { sign };

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Денежное значение: символ валюты, 2 знака после точки, разделитель тысяч
pub fn format_money(value: f64, currency: &str) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-{currency}{body}")
    } else {
        format!("{currency}{body}")
    }
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Компактная запись для осей графиков: 1200 → "1.2K", 3_500_000 → "3.5M"
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(6518.18, "$"), "$6,518.18");
        assert_eq!(format_money(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_money(0.0, "$"), "$0.00");
        assert_eq!(format_money(-1234.5, "$"), "-$1,234.50");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-999999.0, 0), "-999,999");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(3781.0), "3,781");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(72_000.0), "72.0K");
        assert_eq!(format_compact(3_500_000.0), "3.5M");
    }
}
