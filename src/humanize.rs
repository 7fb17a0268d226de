//! Turns machine generated event identifiers into display titles.
//!
//! `"1_etapa_gt3_q2_final"` becomes `"1ª Etapa GT3 – Q2 – Final"`: tokens are classified left to
//! right against a fixed table, qualifying and final tokens are moved into a suffix block, and a
//! pair of numbers such as `8_8` becomes a round indicator `(8/8)`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Separator between the main label and each suffix.
pub const SUFFIX_SEPARATOR: &str = " – ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    Normal,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRule {
    pub label: &'static str,
    pub role: TokenRole,
}

const fn normal(label: &'static str) -> TokenRule {
    TokenRule {
        label,
        role: TokenRole::Normal,
    }
}

const fn suffix(label: &'static str) -> TokenRule {
    TokenRule {
        label,
        role: TokenRole::Suffix,
    }
}

const TOKEN_RULES: &[(&str, TokenRule)] = &[
    // events
    ("gp", normal("GP")),
    // categories
    ("f1", normal("F1")),
    ("gt", normal("GT")),
    ("gt1", normal("GT1")),
    ("gt2", normal("GT2")),
    ("gt3", normal("GT3")),
    ("gt2000", normal("GT2000")),
    ("tc1000", normal("TC1000")),
    ("dtm", normal("DTM")),
    ("dtm-e", suffix("DTM-E")),
    ("lmh", normal("LMH")),
    ("sp", normal("SP")),
    ("dg", normal("DG")),
    ("brm", normal("BRM")),
    // brands
    ("porsche", normal("Porsche")),
    ("ferrari", normal("Ferrari")),
    ("toyota", normal("Toyota")),
    ("nsr", normal("NSR")),
    ("revoslot", normal("Revoslot")),
    // event kinds
    ("treino", normal("Treino")),
    ("warmup", normal("Warmup")),
    ("corrida", normal("Corrida")),
    ("campeonato", normal("Campeonato")),
    ("classico", normal("Clássico")),
    ("classicos", normal("Clássicos")),
    ("hypercar", normal("Hypercar")),
    ("final", suffix("Final")),
];

const QUALIFYING_TOKENS: [&str; 3] = ["q1", "q2", "q3"];

static RULES: LazyLock<HashMap<&'static str, TokenRule>> =
    LazyLock::new(|| TOKEN_RULES.iter().copied().collect());

pub fn token_rule(token: &str) -> Option<TokenRule> {
    RULES.get(token).copied()
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn humanize(raw_identifier: &str) -> String {
    let lowered = raw_identifier.to_lowercase().replace('_', " ");
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut out: Vec<String> = Vec::new();
    let mut suffixes: Vec<String> = Vec::new();
    let mut round: Option<String> = None;

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        let next = tokens.get(i + 1).copied();

        if QUALIFYING_TOKENS.contains(&token) {
            suffixes.push(token.to_uppercase());
            i += 1;
            continue;
        }

        if is_number(token) {
            match next {
                Some("etapa") => {
                    out.push(format!("{token}ª Etapa"));
                    i += 2;
                    continue;
                }
                Some(n) if is_number(n) => {
                    // last pair wins
                    round = Some(format!("{token}/{n}"));
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }

        match token_rule(token) {
            Some(TokenRule {
                label,
                role: TokenRole::Suffix,
            }) => suffixes.push(label.to_owned()),
            Some(TokenRule { label, .. }) => out.push(label.to_owned()),
            None => out.push(capitalize(token)),
        }
        i += 1;
    }

    let mut result = out.join(" ");

    if !suffixes.is_empty() {
        result.push_str(SUFFIX_SEPARATOR);
        result.push_str(&suffixes.join(SUFFIX_SEPARATOR));
    }

    if let Some(round) = round {
        result.push_str(&format!(" ({round})"));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stage_category_qualifying_and_final() {
        assert_eq!(humanize("1_etapa_gt3_q2_final"), "1ª Etapa GT3 – Q2 – Final");
    }

    #[test]
    fn test_round_indicator() {
        assert_eq!(humanize("gp_porsche_8_8"), "GP Porsche (8/8)");
        assert_eq!(
            humanize("campeonato_nsr_3_8_final"),
            "Campeonato NSR – Final (3/8)"
        );
    }

    #[test]
    fn test_unknown_words_are_capitalized() {
        assert_eq!(humanize("noite__dos_CAMPEOES"), "Noite Dos Campeoes");
        assert_eq!(humanize("classico_de_verao"), "Clássico De Verao");
    }

    #[test]
    fn test_suffix_role_tokens() {
        assert_eq!(humanize("dtm_dtm-e_q1"), "DTM – DTM-E – Q1");
    }

    #[test]
    fn test_lonely_number_is_kept() {
        assert_eq!(humanize("gt_2000"), "GT 2000");
        assert_eq!(humanize("treino_3"), "Treino 3");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("___"), "");
        assert_eq!(humanize("final"), " – Final");
    }
}
