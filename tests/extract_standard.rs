// tests/extract_standard.rs
//
// Standard (single paradigm) extraction against a captured-style page.
//
use conj_scrape::core::html::Document;
use conj_scrape::data::{Mood, Tense};
use conj_scrape::error::ExtractError;
use conj_scrape::specs::{self, conjugation};

const DINER: &str = include_str!("fixtures/diner.html");

fn extract(markup: &str, verb: &str) -> Result<Vec<conj_scrape::data::ConjugationRecord>, ExtractError> {
    conjugation::extract(&Document::parse(markup), verb)
}

#[test]
fn full_page_yields_every_allowed_tense() {
    let recs = extract(DINER, "dîner").unwrap();
    assert_eq!(recs.len(), 48);

    let count = |m: Mood, t: Tense| recs.iter().filter(|r| r.mood == m && r.tense == t).count();
    assert_eq!(count(Mood::Indicatif, Tense::Present), 6);
    assert_eq!(count(Mood::Indicatif, Tense::PasseCompose), 6);
    assert_eq!(count(Mood::Indicatif, Tense::Imparfait), 6);
    assert_eq!(count(Mood::Indicatif, Tense::PasseSimple), 6);
    assert_eq!(count(Mood::Indicatif, Tense::FuturSimple), 6);
    assert_eq!(count(Mood::Subjonctif, Tense::Present), 6);
    assert_eq!(count(Mood::Subjonctif, Tense::Imparfait), 6);
    assert_eq!(count(Mood::Conditionnel, Tense::Present), 6);
}

#[test]
fn records_follow_table_and_person_order() {
    let recs = extract(DINER, "dîner").unwrap();
    let first_six: Vec<&str> = recs[..6].iter().map(|r| r.conjugated_form.as_str()).collect();
    assert_eq!(first_six, vec!["dîne", "dînes", "dîne", "dînons", "dînez", "dînent"]);

    let persons: Vec<String> = recs[..6].iter().map(|r| r.person.key()).collect();
    assert_eq!(
        persons,
        vec![
            "première_singulier", "deuxième_singulier", "troisième_singulier",
            "première_pluriel", "deuxième_pluriel", "troisième_pluriel",
        ]
    );
    assert_eq!(recs[0].id, "dîner - indicatif - présent - première_singulier");
    assert_eq!(recs[0].transcription, "\\ʒə din\\");
}

#[test]
fn compound_tense_drops_pronoun() {
    let recs = extract(DINER, "dîner").unwrap();
    let pc: Vec<&str> = recs
        .iter()
        .filter(|r| r.tense == Tense::PasseCompose)
        .map(|r| r.conjugated_form.as_str())
        .collect();
    assert_eq!(pc, vec!["ai dîné", "as dîné", "a dîné", "avons dîné", "avez dîné", "ont dîné"]);

    let first = recs.iter().find(|r| r.tense == Tense::PasseCompose).unwrap();
    assert_eq!(first.id, "dîner - indicatif - passé_composé - première_singulier");
    assert_eq!(first.fields()[5], "passé composé");
}

#[test]
fn single_pronunciation_cell_is_trimmed() {
    let recs = extract(DINER, "dîner").unwrap();
    let fut = recs.iter().find(|r| r.tense == Tense::FuturSimple).unwrap();
    assert_eq!(fut.conjugated_form, "dînerai");
    assert_eq!(fut.transcription, "\\ʒə din.ʁe\\");
}

#[test]
fn moods_come_from_nearest_heading() {
    let recs = extract(DINER, "dîner").unwrap();
    let subj = recs.iter().find(|r| r.mood == Mood::Subjonctif).unwrap();
    assert_eq!(subj.conjugated_form, "dîne");
    assert_eq!(subj.id, "dîner - subjonctif - présent - première_singulier");
    let cond = recs.iter().find(|r| r.mood == Mood::Conditionnel).unwrap();
    assert_eq!(cond.conjugated_form, "dînerais");
}

#[test]
fn extraction_is_deterministic() {
    let a = extract(DINER, "dîner").unwrap();
    let b = extract(DINER, "dîner").unwrap();
    assert_eq!(a, b);
}

#[test]
fn short_tables_yield_partial_sets() {
    let html = r#"
        <h2>Indicatif</h2>
        <table>
          <tr><th>Imparfait</th></tr>
          <tr><td>je</td><td>finissais</td></tr>
          <tr><td>tu</td></tr>
          <tr><td>il</td><td>—</td></tr>
          <tr><td>nous</td><td>finissions</td></tr>
        </table>
    "#;
    let recs = extract(html, "finir").unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].person.key(), "première_singulier");
    // skipped rows still consume their person slot
    assert_eq!(recs[1].person.key(), "première_pluriel");
}

#[test]
fn header_echo_rows_are_rejected() {
    let html = r#"
        <h2>Conditionnel</h2>
        <table>
          <tr><th>Présent</th></tr>
          <tr><td></td><td>présent</td></tr>
          <tr><td>tu</td><td>finirais</td></tr>
        </table>
    "#;
    let recs = extract(html, "finir").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].conjugated_form, "finirais");
    assert_eq!(recs[0].person.key(), "deuxième_singulier");
}

#[test]
fn tense_not_allowed_for_mood_is_ignored() {
    let html = r#"
        <h2>Subjonctif</h2>
        <table>
          <tr><th>Passé simple</th></tr>
          <tr><td>je</td><td>finis</td></tr>
        </table>
    "#;
    assert!(extract(html, "finir").unwrap().is_empty());
}

#[test]
fn broken_compound_row_aborts_the_verb() {
    let html = r#"
        <h2>Indicatif</h2>
        <table>
          <tr><th>Passé composé</th></tr>
          <tr><td>j’ai</td><td>fini</td></tr>
          <tr><td>as</td><td>fini</td></tr>
        </table>
    "#;
    let err = extract(html, "finir").unwrap_err();
    assert_eq!(
        err,
        ExtractError::CompoundTense { verb: "finir".into(), row: 1, cell: "as".into() }
    );
}

#[test]
fn placeholder_participle_aborts_the_verb() {
    let html = r#"
        <h2>Indicatif</h2>
        <table>
          <tr><th>Passé composé</th></tr>
          <tr><td>j'ai</td><td>—</td></tr>
        </table>
    "#;
    let err = extract(html, "falloir").unwrap_err();
    assert!(matches!(err, ExtractError::CompoundTense { row: 0, .. }));
}

#[test]
fn extract_verb_uses_standard_path_for_regular_verbs() {
    let out = specs::extract_verb(&Document::parse(DINER), "dîner").unwrap();
    assert_eq!(out.records.len(), 48);
    assert!(out.warning.is_none());
}
