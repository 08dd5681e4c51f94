use wellness_core::{
    ActionKind, CommutingMethod, DiningFrequency, FinancialPriority, FinancialProfile,
    HousingType, MAX_SUGGESTIONS, PLAN_DAYS, SavingsCategory, SuggestionArea,
    generate_financial_plan,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A spread of profiles touching every enum variant and both empty/full lists.
fn sample_profiles() -> Vec<FinancialProfile> {
    let mut out = vec![
        FinancialProfile::default(),
        FinancialProfile::new(5000.0, 4000.0, 500.0),
        FinancialProfile::new(0.0, 0.0, 0.0),
        FinancialProfile::new(2000.0, 2600.0, 0.0),
        FinancialProfile::new(9000.0, 3000.0, 4000.0).with_goal(12000.0),
    ];

    let housing = [HousingType::Rent, HousingType::Own, HousingType::WithFamily, HousingType::Other, HousingType::Unset];
    let dining = [DiningFrequency::Rarely, DiningFrequency::Sometimes, DiningFrequency::Often, DiningFrequency::VeryOften, DiningFrequency::Unset];
    let commute = CommutingMethod::ALL;

    for (i, h) in housing.iter().enumerate() {
        let profile = FinancialProfile::new(3000.0 + i as f64 * 1000.0, 2500.0, i as f64 * 300.0)
            .with_goal(5000.0)
            .with_housing(*h)
            .with_dining(dining[i])
            .with_commute(commute[i])
            .with_occupation(if i % 2 == 0 { "engineer" } else { "" })
            .with_expense_categories(["Groceries", "Entertainment", "Utilities", "Housing", "Travel"].into_iter().skip(i))
            .with_subscriptions(std::iter::repeat("svc").take(i))
            .with_hobbies(["Shopping", "Traveling", "Collecting"].into_iter().take(i))
            .with_priorities(FinancialPriority::ALL.into_iter().skip(i));
        out.push(profile);
    }
    out
}

#[test]
fn test_plan_always_has_thirty_ordered_days() {
    for profile in sample_profiles() {
        let plan = generate_financial_plan(&profile);
        assert_eq!(plan.thirty_day_plan.len(), PLAN_DAYS);
        let days: Vec<u8> = plan.thirty_day_plan.iter().map(|a| a.day).collect();
        let expected: Vec<u8> = (1..=30).collect();
        assert_eq!(days, expected);
    }
}

#[test]
fn test_suggestions_and_tips_bounded() {
    for profile in sample_profiles() {
        let plan = generate_financial_plan(&profile);
        assert!(plan.personalized_suggestions.len() <= MAX_SUGGESTIONS);
        assert!(!plan.personalized_suggestions.is_empty());
        assert!(plan.daily_tips.len() >= 4 && plan.daily_tips.len() <= 7);
        assert!(plan.savings_target >= 0.0);
    }
}

#[test]
fn test_generation_is_idempotent() {
    for profile in sample_profiles() {
        assert_eq!(generate_financial_plan(&profile), generate_financial_plan(&profile));
    }
}

#[test]
fn test_scenario_a_stuck() {
    let plan = generate_financial_plan(&FinancialProfile::new(5000.0, 4000.0, 500.0));
    assert!(approx(plan.savings_rate, 0.1));
    assert_eq!(plan.category, SavingsCategory::Stuck);
    assert!(approx(plan.savings_target, 250.0));
    assert!(approx(plan.expense_reduction_target, 150.0));
    assert!(approx(plan.projected_savings, 750.0));
    assert!(plan.daily_tips.contains(&"Try to save an additional $250.00 per month".to_string()));
    assert!(plan.daily_tips.contains(&"Look for ways to reduce expenses by $150.00".to_string()));
}

#[test]
fn test_scenario_b_zero_income() {
    let plan = generate_financial_plan(&FinancialProfile::new(0.0, 1200.0, 0.0));
    assert_eq!(plan.savings_rate, 0.0);
    assert_eq!(plan.category, SavingsCategory::Critical);
    assert!(plan.category_message.starts_with("Everyone starts somewhere"));
}

#[test]
fn test_scenario_c_subscriptions_only() {
    let profile = FinancialProfile::default().with_subscriptions(["Netflix", "Hulu", "Spotify", "Xbox"]);
    let plan = generate_financial_plan(&profile);
    let s = &plan.personalized_suggestions;
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].category, SuggestionArea::Subscriptions);
    assert!(approx(s[0].potential_savings, 48.0));
    assert_eq!(s[1].title, "Automate your savings");
}

#[test]
fn test_scenario_d_four_suggestions() {
    let profile = FinancialProfile::new(5000.0, 3000.0, 200.0)
        .with_housing(HousingType::Rent)
        .with_commute(CommutingMethod::Car)
        .with_dining(DiningFrequency::VeryOften);
    let plan = generate_financial_plan(&profile);
    let areas: Vec<SuggestionArea> = plan.personalized_suggestions.iter().map(|s| s.category).collect();
    assert_eq!(
        areas,
        vec![
            SuggestionArea::Housing,
            SuggestionArea::Transportation,
            SuggestionArea::Food,
            SuggestionArea::Other,
        ]
    );
    assert!(approx(plan.personalized_suggestions[0].potential_savings, 450.0));
    assert!(approx(plan.personalized_suggestions[1].potential_savings, 120.0));
    assert!(approx(plan.personalized_suggestions[2].potential_savings, 360.0));
    assert!(approx(plan.personalized_suggestions[3].potential_savings, 150.0));
}

#[test]
fn test_category_block_follows_classification() {
    let growing = generate_financial_plan(&FinancialProfile::new(5000.0, 3000.0, 1000.0));
    assert_eq!(growing.category, SavingsCategory::Growing);
    assert_eq!(growing.thirty_day_plan[12].task, "Compare interest rates on high-yield savings accounts");

    let critical = generate_financial_plan(&FinancialProfile::new(5000.0, 4800.0, 100.0));
    assert_eq!(critical.category, SavingsCategory::Critical);
    assert_eq!(critical.thirty_day_plan[12].task, "Research local free financial counseling");
    assert!(critical.thirty_day_plan[10..15].iter().all(|a| a.category == ActionKind::Action));
}

#[test]
fn test_plan_json_wire_shape() {
    let profile = FinancialProfile::new(5000.0, 4000.0, 500.0).with_dining(DiningFrequency::Often);
    let plan = generate_financial_plan(&profile);
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["category"], "Stuck");
    assert_eq!(json["thirty_day_plan"][0]["category"], "awareness");
    assert_eq!(json["thirty_day_plan"][29]["day"], 30);
    assert_eq!(json["personalized_suggestions"][0]["category"], "food");
    assert_eq!(json["daily_tips"].as_array().map(Vec::len), Some(plan.daily_tips.len()));
}
