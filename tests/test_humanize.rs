use pretty_assertions::assert_eq;
use slotchrono::humanize;

#[test]
fn test_humanize_event_identifiers() {
    let cases = [
        ("1_etapa_gt3_q2_final", "1ª Etapa GT3 – Q2 – Final"),
        ("2_etapa_classicos_ferrari", "2ª Etapa Clássicos Ferrari"),
        ("campeonato_tc1000_q1_q3", "Campeonato TC1000 – Q1 – Q3"),
        ("GP_Toyota_LMH_hypercar", "GP Toyota LMH Hypercar"),
        ("treino_livre_revoslot_2_4", "Treino Livre Revoslot (2/4)"),
    ];

    for (raw, expected) in cases {
        assert_eq!(humanize(raw), expected, "humanizing `{raw}`");
    }
}

#[test]
fn test_humanize_is_independent_of_underscore_runs() {
    assert_eq!(humanize("gt3__final"), humanize("gt3_final"));
    assert_eq!(humanize("_gt3_final_"), "GT3 – Final");
}
