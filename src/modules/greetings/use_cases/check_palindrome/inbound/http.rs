use axum::extract::Path;

use crate::modules::greetings::core::palindrome::is_palindrome;

pub async fn handle(Path(word): Path<String>) -> String {
    if is_palindrome(&word) {
        format!("The word {word} is a palindrome")
    } else {
        format!("The word {word} is not a palindrome")
    }
}
