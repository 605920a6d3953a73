use lc_core::{Collection, CoreError};
use lc_core::entities::{Blurbs, DomainBundle, Keyed, Project, ProjectImage, StageBlurbs};

fn project(
    title: &str,
    intro: &str,
    conclusion: &str,
    image: (&str, &str),
    qr_codes: &[&str],
    authors: &[&str],
) -> Project {
    Project {
        title: title.to_string(),
        intro: intro.to_string(),
        conclusion: conclusion.to_string(),
        image: ProjectImage {
            src: image.0.to_string(),
            citation: image.1.to_string(),
        },
        qr_code: qr_codes.iter().map(|q| (*q).to_string()).collect(),
        author: authors.iter().map(|a| (*a).to_string()).collect(),
    }
}

fn bundle(projects: Vec<Project>, questions: &[&str]) -> DomainBundle {
    DomainBundle {
        projects,
        questions: questions.iter().map(|q| (*q).to_string()).collect(),
    }
}

fn stage(domains: Vec<(&str, DomainBundle)>) -> Result<StageBlurbs, CoreError> {
    Ok(StageBlurbs {
        domains: Keyed::try_from_entries(Collection::Blurbs, domains)?,
    })
}

pub(crate) fn blurbs() -> Result<Blurbs, CoreError> {
    Blurbs::try_from_entries(
        Collection::Blurbs,
        [
            (
                "early",
                stage(vec![
                    (
                        "family",
                        bundle(
                            vec![project(
                                "Who minds the baby?",
                                "Families combine grandparents, infant care and parental leave in the first two years.",
                                "Childcare arrangements shift quickly once children turn two.",
                                (
                                    "/images/projects/early-family.jpg",
                                    "Photo: Centre for Family Research",
                                ),
                                &["/images/qr/early-family.png"],
                                &["Mei Tan"],
                            )],
                            &["q1"],
                        ),
                    ),
                    (
                        "education",
                        bundle(
                            vec![project(
                                "Reading before school",
                                "Shared book reading at home is measured at ages three and five.",
                                "Children read to daily enter primary school with larger vocabularies.",
                                (
                                    "/images/projects/early-reading.jpg",
                                    "Illustration: Zoë Lim",
                                ),
                                &["/images/qr/early-reading.png"],
                                &["Zoë Lim", "Arjun Rao"],
                            )],
                            &["q2"],
                        ),
                    ),
                ])?,
            ),
            (
                "childhood",
                stage(vec![(
                    "education",
                    bundle(
                        vec![project(
                            "Maths confidence in primary school",
                            "Pupils rate their own maths ability each year from Primary 1 to 6.",
                            "Self-rated confidence predicts later maths scores.",
                            (
                                "/images/projects/childhood-maths.jpg",
                                "Photo: Ministry of Education",
                            ),
                            &[
                                "/images/qr/childhood-maths.png",
                                "/images/qr/childhood-maths-data.png",
                            ],
                            &["Hannah Goh"],
                        )],
                        &["q2"],
                    ),
                )])?,
            ),
            (
                "tertiary",
                stage(vec![(
                    "education",
                    bundle(
                        vec![project(
                            "Pathways after school",
                            "Students choose between polytechnic, university and early employment.",
                            "About half of each cohort now continues to tertiary study.",
                            (
                                "/images/projects/tertiary-pathways.jpg",
                                "Chart: Graduate Survey",
                            ),
                            &["/images/qr/tertiary-pathways.png"],
                            &["Rahul Menon"],
                        )],
                        &["q3"],
                    ),
                )])?,
            ),
            (
                "adult",
                stage(vec![
                    (
                        "work",
                        bundle(
                            vec![project(
                                "Work in the age of AI",
                                "Workers report which tasks they already share with software tools.",
                                "Judgement-heavy tasks are the least likely to be automated.",
                                (
                                    "/images/projects/adult-work.jpg",
                                    "Photo: Labour Study Team",
                                ),
                                &["/images/qr/adult-work.png"],
                                &["Chloé Martin"],
                            )],
                            &["q5"],
                        ),
                    ),
                    ("family", bundle(Vec::new(), &["q4"])),
                ])?,
            ),
            (
                "senior",
                stage(vec![
                    (
                        "health",
                        bundle(
                            vec![project(
                                "Staying active after sixty",
                                "Older adults log weekly physical activity over five years.",
                                "Regular moderate exercise tracks with fewer hospital stays.",
                                (
                                    "/images/projects/senior-health.jpg",
                                    "Photo: Healthy Ageing Cohort",
                                ),
                                &["/images/qr/senior-health.png"],
                                &["Ines Ortega", "Wei Jie Koh"],
                            )],
                            &["q6"],
                        ),
                    ),
                    ("leisure", bundle(Vec::new(), &["q7"])),
                ])?,
            ),
        ],
    )
}
