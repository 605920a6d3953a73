use lc_core::entities::Domain;

fn domain(id: &str, label: &str, color: &str, icon: &str, questions: &[&str]) -> Domain {
    Domain {
        id: id.to_string(),
        label: label.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        question_ids: questions.iter().map(|q| (*q).to_string()).collect(),
    }
}

pub(crate) fn domains() -> Vec<Domain> {
    vec![
        domain("family", "Family", "#38a169", "👨‍👩‍👧‍👦", &["q1", "q4"]),
        domain("education", "Education", "#3182ce", "🎓", &["q2", "q3"]),
        domain("work", "Work", "#dd6b20", "💼", &["q5"]),
        domain("health", "Health", "#e53e3e", "🩺", &["q6"]),
        domain("leisure", "Leisure", "#d69e2e", "🎨", &["q7"]),
    ]
}
