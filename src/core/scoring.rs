use crate::models::{
    CandidateRecord, CompanyProfile, JobProfile, Recommendation, ScoreBreakdown, ScoreCategory,
    ScoreThresholds, ScoringWeights, WeightedKeyword, WeightedSkill,
};

/// Evaluate a candidate against a job and company profile
///
/// Scoring formula:
/// overall = (
///     skill_match_score * 0.35 +       # weighted required-skill coverage
///     experience_match_score * 0.25 +  # years vs. required years
///     culture_fit_score * 0.20 +       # culture keywords found in resume text
///     education_match_score * 0.20     # education tier vs. requirement
/// )
///
/// Pure function of its inputs: no I/O, deterministic, every score in [0,100].
pub fn evaluate(
    candidate: &CandidateRecord,
    job: &JobProfile,
    company: &CompanyProfile,
    weights: &ScoringWeights,
    thresholds: &ScoreThresholds,
) -> ScoreBreakdown {
    let skill = skill_match_score(&job.required_skills, candidate);
    let experience = experience_match_score(candidate.experience_years, job.min_experience_years);
    let culture = culture_fit_score(&company.culture_keywords, &candidate.raw_text);
    let education = education_match_score(candidate, job);

    let overall = round_one_decimal(
        skill * weights.skill
            + experience * weights.experience
            + culture * weights.culture
            + education * weights.education,
    );

    let recommendation = recommend(overall, thresholds);

    // Fixed category order: skill, experience, culture, education
    let sub_scores = [skill, experience, culture, education];
    let interview_focus_areas = ScoreCategory::ALL
        .iter()
        .zip(sub_scores.iter())
        .filter(|(_, score)| **score < thresholds.focus)
        .map(|(category, _)| *category)
        .collect();

    ScoreBreakdown {
        skill_match_score: skill,
        experience_match_score: experience,
        culture_fit_score: culture,
        education_match_score: education,
        overall_score: overall,
        recommendation,
        interview_focus_areas,
    }
}

/// Weighted coverage of required skills (0-100)
///
/// An empty requirement set is trivially satisfied and scores 100.
#[inline]
pub fn skill_match_score(required: &[WeightedSkill], candidate: &CandidateRecord) -> f64 {
    let total: f64 = required.iter().map(|s| s.weight).sum();
    if required.is_empty() || total <= 0.0 {
        return 100.0;
    }

    let matched: f64 = required
        .iter()
        .filter(|s| candidate.has_skill(&s.name))
        .map(|s| s.weight)
        .sum();

    (matched / total * 100.0).min(100.0)
}

/// Years of experience vs. the job minimum (0-100)
///
/// Meets or exceeds the minimum: 100. Below: linear ramp toward zero.
/// A zero-year requirement is trivially satisfied.
#[inline]
pub fn experience_match_score(candidate_years: u8, min_years: u8) -> f64 {
    if min_years == 0 || candidate_years >= min_years {
        return 100.0;
    }

    f64::from(candidate_years) / f64::from(min_years) * 100.0
}

/// Weighted culture keyword coverage over the raw resume text (0-100)
///
/// Same empty-set convention as the skill match.
#[inline]
pub fn culture_fit_score(keywords: &[WeightedKeyword], raw_text: &str) -> f64 {
    let total: f64 = keywords.iter().map(|k| k.weight).sum();
    if keywords.is_empty() || total <= 0.0 {
        return 100.0;
    }

    let lower = raw_text.to_lowercase();
    let matched: f64 = keywords
        .iter()
        .filter(|k| lower.contains(&k.keyword.to_lowercase()))
        .map(|k| k.weight)
        .sum();

    (matched / total * 100.0).min(100.0)
}

/// Education tier vs. the job requirement (0-100)
///
/// Meeting or exceeding the required tier scores 100; each tier short
/// reduces the score proportionally, floor 0.
#[inline]
pub fn education_match_score(candidate: &CandidateRecord, job: &JobProfile) -> f64 {
    let required = job.education_requirement.rank();
    if required == 0 {
        return 100.0;
    }

    let achieved = candidate.education_tier().rank();
    if achieved >= required {
        return 100.0;
    }

    f64::from(achieved) / f64::from(required) * 100.0
}

/// Recommendation tier from the overall score; lower bounds are inclusive
#[inline]
pub fn recommend(overall_score: f64, thresholds: &ScoreThresholds) -> Recommendation {
    if overall_score >= thresholds.pass {
        Recommendation::Pass
    } else if overall_score >= thresholds.interview {
        Recommendation::Interview
    } else {
        Recommendation::Reject
    }
}

#[inline]
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationTier;

    fn create_candidate(
        skills: &[&str],
        experience_years: u8,
        education: &[&str],
        raw_text: &str,
    ) -> CandidateRecord {
        CandidateRecord {
            name: "Test Candidate".to_string(),
            email: "test@example.com".to_string(),
            experience_years,
            education: education.iter().map(|s| s.to_string()).collect(),
            certifications: vec![],
            skills: skills.iter().map(|s| s.to_string()).collect(),
            raw_text: raw_text.to_string(),
        }
    }

    fn create_job(required: &[(&str, f64)], min_years: u8, tier: EducationTier) -> JobProfile {
        JobProfile {
            title: "Test Role".to_string(),
            required_skills: required
                .iter()
                .map(|(name, weight)| WeightedSkill {
                    name: name.to_string(),
                    weight: *weight,
                })
                .collect(),
            min_experience_years: min_years,
            education_requirement: tier,
        }
    }

    fn create_company(keywords: &[(&str, f64)]) -> CompanyProfile {
        CompanyProfile {
            name: "Test Co".to_string(),
            culture_keywords: keywords
                .iter()
                .map(|(keyword, weight)| WeightedKeyword {
                    keyword: keyword.to_string(),
                    weight: *weight,
                })
                .collect(),
            values: vec![],
        }
    }

    #[test]
    fn test_perfect_candidate_scores_100() {
        let candidate = create_candidate(
            &["AWS", "Python", "Leadership"],
            8,
            &["Bachelor's"],
            "strong teamwork across projects",
        );
        let job = create_job(&[("AWS", 0.5), ("Python", 0.5)], 5, EducationTier::Bachelor);
        let company = create_company(&[("teamwork", 1.0)]);

        let breakdown = evaluate(
            &candidate,
            &job,
            &company,
            &ScoringWeights::default(),
            &ScoreThresholds::default(),
        );

        assert_eq!(breakdown.skill_match_score, 100.0);
        assert_eq!(breakdown.experience_match_score, 100.0);
        assert_eq!(breakdown.culture_fit_score, 100.0);
        assert_eq!(breakdown.education_match_score, 100.0);
        assert_eq!(breakdown.overall_score, 100.0);
        assert_eq!(breakdown.recommendation, Recommendation::Pass);
        assert!(breakdown.interview_focus_areas.is_empty());
    }

    #[test]
    fn test_partial_skill_overlap() {
        let candidate = create_candidate(&["Python"], 8, &["Bachelor's"], "teamwork");
        let job = create_job(&[("AWS", 0.5), ("Python", 0.5)], 5, EducationTier::Bachelor);
        let company = create_company(&[("teamwork", 1.0)]);

        let breakdown = evaluate(
            &candidate,
            &job,
            &company,
            &ScoringWeights::default(),
            &ScoreThresholds::default(),
        );

        assert_eq!(breakdown.skill_match_score, 50.0);
        assert!(breakdown
            .interview_focus_areas
            .contains(&ScoreCategory::Skill));
        // 50*0.35 + 100*0.25 + 100*0.20 + 100*0.20 = 82.5
        assert_eq!(breakdown.overall_score, 82.5);
    }

    #[test]
    fn test_empty_required_skills_scores_100() {
        let candidate = create_candidate(&[], 0, &[], "");

        assert_eq!(skill_match_score(&[], &candidate), 100.0);
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        let candidate = create_candidate(&["python"], 0, &[], "");
        let required = vec![WeightedSkill {
            name: "Python".to_string(),
            weight: 1.0,
        }];

        assert_eq!(skill_match_score(&required, &candidate), 100.0);
    }

    #[test]
    fn test_experience_meets_requirement() {
        assert_eq!(experience_match_score(5, 5), 100.0);
        assert_eq!(experience_match_score(10, 5), 100.0);
    }

    #[test]
    fn test_experience_linear_ramp() {
        assert_eq!(experience_match_score(2, 4), 50.0);
        assert_eq!(experience_match_score(1, 4), 25.0);
        assert_eq!(experience_match_score(0, 4), 0.0);
    }

    #[test]
    fn test_experience_zero_requirement() {
        assert_eq!(experience_match_score(0, 0), 100.0);
    }

    #[test]
    fn test_culture_fit_weighted_partial() {
        let keywords = vec![
            WeightedKeyword {
                keyword: "teamwork".to_string(),
                weight: 3.0,
            },
            WeightedKeyword {
                keyword: "innovation".to_string(),
                weight: 1.0,
            },
        ];

        assert_eq!(culture_fit_score(&keywords, "values Teamwork highly"), 75.0);
        assert_eq!(culture_fit_score(&keywords, "no match at all"), 0.0);
        assert_eq!(culture_fit_score(&[], "anything"), 100.0);
    }

    #[test]
    fn test_education_one_tier_short() {
        let candidate = create_candidate(&[], 0, &["Lincoln High School"], "");
        let job = create_job(&[], 0, EducationTier::Bachelor);

        // highschool rank 1 vs bachelor rank 2
        assert_eq!(education_match_score(&candidate, &job), 50.0);
    }

    #[test]
    fn test_education_no_requirement() {
        let candidate = create_candidate(&[], 0, &[], "");
        let job = create_job(&[], 0, EducationTier::None);

        assert_eq!(education_match_score(&candidate, &job), 100.0);
    }

    #[test]
    fn test_education_exceeding_requirement() {
        let candidate = create_candidate(&[], 0, &["Ph.D. in Chemistry"], "");
        let job = create_job(&[], 0, EducationTier::Bachelor);

        assert_eq!(education_match_score(&candidate, &job), 100.0);
    }

    #[test]
    fn test_education_missing_scores_zero() {
        let candidate = create_candidate(&[], 0, &[], "");
        let job = create_job(&[], 0, EducationTier::Master);

        assert_eq!(education_match_score(&candidate, &job), 0.0);
    }

    #[test]
    fn test_recommendation_boundaries_inclusive() {
        let thresholds = ScoreThresholds::default();

        assert_eq!(recommend(80.0, &thresholds), Recommendation::Pass);
        assert_eq!(recommend(79.9, &thresholds), Recommendation::Interview);
        assert_eq!(recommend(60.0, &thresholds), Recommendation::Interview);
        assert_eq!(recommend(59.9, &thresholds), Recommendation::Reject);
        assert_eq!(recommend(0.0, &thresholds), Recommendation::Reject);
        assert_eq!(recommend(100.0, &thresholds), Recommendation::Pass);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = ScoreThresholds {
            pass: 90.0,
            interview: 50.0,
            focus: 70.0,
        };

        assert_eq!(recommend(85.0, &thresholds), Recommendation::Interview);
        assert_eq!(recommend(49.0, &thresholds), Recommendation::Reject);
    }

    #[test]
    fn test_focus_areas_in_fixed_order() {
        let candidate = create_candidate(&[], 0, &[], "");
        let job = create_job(&[("Rust", 1.0)], 10, EducationTier::Master);
        let company = create_company(&[("ownership", 1.0)]);

        let breakdown = evaluate(
            &candidate,
            &job,
            &company,
            &ScoringWeights::default(),
            &ScoreThresholds::default(),
        );

        assert_eq!(
            breakdown.interview_focus_areas,
            vec![
                ScoreCategory::Skill,
                ScoreCategory::Experience,
                ScoreCategory::Culture,
                ScoreCategory::Education,
            ]
        );
        assert_eq!(breakdown.recommendation, Recommendation::Reject);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let candidate = create_candidate(&["Python"], 3, &["Bachelor's"], "teamwork matters");
        let job = create_job(&[("Python", 0.6), ("AWS", 0.4)], 5, EducationTier::Bachelor);
        let company = create_company(&[("teamwork", 1.0), ("growth", 1.0)]);
        let weights = ScoringWeights::default();
        let thresholds = ScoreThresholds::default();

        let first = evaluate(&candidate, &job, &company, &weights, &thresholds);
        for _ in 0..10 {
            let next = evaluate(&candidate, &job, &company, &weights, &thresholds);
            assert_eq!(next.overall_score.to_bits(), first.overall_score.to_bits());
            assert_eq!(
                next.skill_match_score.to_bits(),
                first.skill_match_score.to_bits()
            );
            assert_eq!(next.recommendation, first.recommendation);
            assert_eq!(next.interview_focus_areas, first.interview_focus_areas);
        }
    }

    #[test]
    fn test_all_scores_bounded() {
        let extremes = [
            create_candidate(&[], 0, &[], ""),
            create_candidate(&["Python", "AWS", "Rust"], 255, &["Ph.D."], "teamwork growth"),
        ];
        let jobs = [
            create_job(&[], 0, EducationTier::None),
            create_job(&[("Python", 0.1)], 1, EducationTier::Doctorate),
        ];
        let company = create_company(&[("teamwork", 0.5), ("growth", 0.5)]);

        for candidate in &extremes {
            for job in &jobs {
                let breakdown = evaluate(
                    candidate,
                    job,
                    &company,
                    &ScoringWeights::default(),
                    &ScoreThresholds::default(),
                );

                for score in [
                    breakdown.skill_match_score,
                    breakdown.experience_match_score,
                    breakdown.culture_fit_score,
                    breakdown.education_match_score,
                    breakdown.overall_score,
                ] {
                    assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
                }
            }
        }
    }
}
