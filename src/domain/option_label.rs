/// Human-readable label for a selected option identifier: dashes become spaces and
/// every word starts with a capital letter (`gpt-4-turbo` → `Gpt 4 Turbo`).
pub fn option_label(option_id: &str) -> String {
    let mut label = String::with_capacity(option_id.len());
    let mut previous_is_word = false;
    for c in option_id.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !previous_is_word {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        previous_is_word = is_word;
    }
    label
}
