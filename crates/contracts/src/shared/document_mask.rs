//! Маска для поля документа (RG / CPF)

const MAX_LEN: usize = 11;

/// Приводит ввод к формату документа.
///
/// Оставляет только `A-Z0-9` (в верхнем регистре), не больше 11 символов.
/// 9 цифр форматируются как RG `NN.NNN.NNN-N`, 11 цифр как CPF
/// `NNN.NNN.NNN-NN`; остальное возвращается очищенным без маски.
pub fn mask_document(input: &str) -> String {
    let cleaned: String = input
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .take(MAX_LEN)
        .collect();

    let all_digits = cleaned.chars().all(|c| c.is_ascii_digit());

    match cleaned.len() {
        9 if all_digits => format!(
            "{}.{}.{}-{}",
            &cleaned[0..2],
            &cleaned[2..5],
            &cleaned[5..8],
            &cleaned[8..9]
        ),
        11 if all_digits => format!(
            "{}.{}.{}-{}",
            &cleaned[0..3],
            &cleaned[3..6],
            &cleaned[6..9],
            &cleaned[9..11]
        ),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rg_mask() {
        assert_eq!(mask_document("123456789"), "12.345.678-9");
    }

    #[test]
    fn test_cpf_mask() {
        assert_eq!(mask_document("12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_mask_is_idempotent() {
        assert_eq!(mask_document("12.345.678-9"), "12.345.678-9");
        assert_eq!(mask_document("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn test_partial_input_left_unmasked() {
        assert_eq!(mask_document("1234"), "1234");
        assert_eq!(mask_document("1234567890"), "1234567890");
    }

    #[test]
    fn test_letters_uppercased_and_truncated() {
        assert_eq!(mask_document("mg-12 345 678"), "MG12345678");
        assert_eq!(mask_document("12345678x"), "12345678X");
        assert_eq!(mask_document("123456789012345"), "123.456.789-01");
    }
}
