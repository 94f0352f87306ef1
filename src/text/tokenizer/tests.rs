use super::*;

#[test]
fn lowercases_and_splits_on_punctuation() {
    let tokens = tokenize("Newton's Laws: FORCE, mass; acceleration!");
    assert_eq!(tokens, vec!["newton", "laws", "force", "mass", "acceleration"]);
}

#[test]
fn drops_short_tokens() {
    let tokens = tokenize("a an of pi sin cos tan");
    assert_eq!(tokens, vec!["sin", "cos", "tan"]);
}

#[test]
fn drops_english_and_turkish_stop_words() {
    let tokens = tokenize("The derivative and the integral için türev ve integral gibi");
    assert_eq!(
        tokens,
        vec!["derivative", "integral", "türev", "integral"]
    );
}

#[test]
fn keeps_turkish_letters() {
    let tokens = tokenize("Öğrenci şekilleri çözüyor, ılık güneş");
    assert_eq!(
        tokens,
        vec!["öğrenci", "şekilleri", "çözüyor", "ılık", "güneş"]
    );
}

#[test]
fn dotted_capital_i_folds_to_plain_i() {
    assert_eq!(tokenize("İntegral İstanbul"), vec!["integral", "istanbul"]);
    assert_eq!(fold_case("İzmir"), "izmir");
    assert_eq!(fold_case("İ").chars().count(), 1);
}

#[test]
fn keeps_combining_marks_inside_words() {
    // "e" followed by U+0301 COMBINING ACUTE ACCENT
    let tokens = tokenize("cafe\u{301} menu");
    assert_eq!(tokens, vec!["cafe\u{301}", "menu"]);
}

#[test]
fn keeps_digits_and_underscores() {
    let tokens = tokenize("python3 snake_case 2024");
    assert_eq!(tokens, vec!["python3", "snake_case", "2024"]);
}

#[test]
fn empty_and_symbol_only_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t ").is_empty());
    assert!(tokenize("!!! ... ??? ---").is_empty());
}

#[test]
fn is_deterministic() {
    let text = "Photosynthesis converts light energy into chemical energy.";
    assert_eq!(tokenize(text), tokenize(text));
}

#[test]
fn stop_word_lookup() {
    assert!(is_stop_word("the"));
    assert!(is_stop_word("için"));
    assert!(!is_stop_word("türev"));
}
