use lc_core::entities::LifeStage;

use crate::STAGE_COLOR;

fn stage(id: &str, title: &str, icon: &str, domains: &[&str], blurbs: &[&str]) -> LifeStage {
    LifeStage {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        domains: domains.iter().map(|d| (*d).to_string()).collect(),
        blurbs: blurbs.iter().map(|b| (*b).to_string()).collect(),
        color: STAGE_COLOR.to_string(),
        metrics: Vec::new(),
    }
}

pub(crate) fn life_stages() -> Vec<LifeStage> {
    vec![
        stage(
            "early",
            "Early Childhood",
            "👶",
            &["family", "education"],
            &["early"],
        ),
        stage(
            "childhood",
            "Childhood",
            "🧒",
            &["education", "family"],
            &["childhood"],
        ),
        stage(
            "tertiary",
            "Tertiary Education",
            "🎓",
            &["education", "work", "family"],
            &["tertiary"],
        ),
        stage(
            "adult",
            "Adult Life",
            "💼",
            &["family", "work", "health"],
            &["adult"],
        ),
        stage(
            "senior",
            "Senior Life",
            "👴",
            &["leisure", "health", "family"],
            &["senior"],
        ),
        stage(
            "ai_future",
            "AI and the Future",
            "🤖",
            &["work", "education", "health"],
            &[],
        ),
    ]
}
