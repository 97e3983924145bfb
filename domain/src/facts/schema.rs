//! Per-domain fact schemas (normalization strategies)
//!
//! Each [`FactSchema`] variant owns one fixed mapping from form fields to
//! facts. The order of the builder calls below is the order facts appear in
//! the resulting [`FactSet`].
//!
//! | Schema | Boolean fields | Numeric fields | Categorical defaults |
//! |--------|----------------|----------------|----------------------|
//! | Tenant | presence facts | `days_since`, `rent_unpaid` | `damage`=no, `written_agreement`=no |
//! | Consumer | presence facts | `days_since_purchase` | none |
//! | Contract | presence facts | `days_since_breach` | none |
//! | Traffic | `has_license` yes/no | speeds (int), `breathalyzer` (float) | `helmet`=yes, `seatbelt`=yes |
//! | Cyber | presence + `clicked_link` yes/no | none | none |
//! | Employment | yes/no facts | `unpaid_salary_months` | none |

use super::entities::FactSet;
use super::raw_input::RawInput;
use serde::{Deserialize, Serialize};

/// Normalization strategy selected by a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactSchema {
    Tenant,
    Consumer,
    Contract,
    Traffic,
    Cyber,
    Employment,
}

impl FactSchema {
    /// Build the canonical fact set for this schema.
    ///
    /// Never fails: every malformed field falls back to its default.
    pub fn normalize(&self, input: &RawInput) -> FactSet {
        match self {
            FactSchema::Tenant => tenant(input),
            FactSchema::Consumer => consumer(input),
            FactSchema::Contract => contract(input),
            FactSchema::Traffic => traffic(input),
            FactSchema::Cyber => cyber(input),
            FactSchema::Employment => employment(input),
        }
    }

    /// Form fields this schema reads, in check order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FactSchema::Tenant => &[
                "rent_paid",
                "notice_given",
                "deposit_returned",
                "days_since",
                "damage",
                "rent_unpaid",
                "written_agreement",
            ],
            FactSchema::Consumer => &[
                "defective",
                "days_since_purchase",
                "bill_present",
                "warranty",
            ],
            FactSchema::Contract => &[
                "signed_by_both",
                "essential_terms",
                "terms_broken",
                "days_since_breach",
            ],
            FactSchema::Traffic => &[
                "helmet",
                "license",
                "recorded_speed",
                "speed_limit",
                "breathalyzer",
                "seatbelt",
            ],
            FactSchema::Cyber => &["otp_shared", "clicked_link", "unauthorized_transaction"],
            FactSchema::Employment => &[
                "unpaid_salary_months",
                "terminated_without_notice",
                "harassment",
            ],
        }
    }
}

fn tenant(input: &RawInput) -> FactSet {
    FactSet::builder()
        .flag_if("rent_paid", input.is_yes("rent_paid"))
        .flag_if("notice_given", input.is_yes("notice_given"))
        .flag_if("deposit_not_returned", input.equals("deposit_returned", "No"))
        .int("days_since_vacate", input.int_or_zero("days_since"))
        .atom("property_damage", input.atom_or("damage", "no"))
        .int("rent_unpaid_months", input.int_or_zero("rent_unpaid"))
        .atom(
            "written_agreement",
            input.atom_or("written_agreement", "no"),
        )
        .build()
}

fn consumer(input: &RawInput) -> FactSet {
    FactSet::builder()
        .flag_if("product_defective", input.is_yes("defective"))
        .int(
            "days_since_purchase",
            input.int_or_zero("days_since_purchase"),
        )
        .flag_if("bill_present", input.is_yes("bill_present"))
        .flag_if("warranty_active", input.is_yes("warranty"))
        .build()
}

fn contract(input: &RawInput) -> FactSet {
    FactSet::builder()
        .flag_if("signed_by_both", input.is_yes("signed_by_both"))
        .flag_if("essential_terms_present", input.is_yes("essential_terms"))
        .flag_if("terms_broken", input.is_yes("terms_broken"))
        .int("days_since_breach", input.int_or_zero("days_since_breach"))
        .build()
}

fn traffic(input: &RawInput) -> FactSet {
    FactSet::builder()
        .atom("helmet", input.atom_or("helmet", "yes"))
        .yes_no("has_license", input.is_yes("license"))
        .int("recorded_speed", input.int_or_zero("recorded_speed"))
        .int("speed_limit", input.int_or_zero("speed_limit"))
        .float("breathalyzer", input.float_or_zero("breathalyzer"))
        .atom("seatbelt", input.atom_or("seatbelt", "yes"))
        .build()
}

fn cyber(input: &RawInput) -> FactSet {
    FactSet::builder()
        .flag_if("otp_shared", input.is_yes("otp_shared"))
        .yes_no("clicked_link", input.is_yes("clicked_link"))
        .flag_if(
            "unauthorized_transaction",
            input.is_yes("unauthorized_transaction"),
        )
        .build()
}

fn employment(input: &RawInput) -> FactSet {
    FactSet::builder()
        .int(
            "unpaid_salary_months",
            input.int_or_zero("unpaid_salary_months"),
        )
        .yes_no(
            "terminated_without_notice",
            input.is_yes("terminated_without_notice"),
        )
        .yes_no("harassment", input.is_yes("harassment"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::entities::{Fact, FactValue};

    fn clauses(schema: FactSchema, input: &RawInput) -> Vec<String> {
        schema
            .normalize(input)
            .iter()
            .map(|f| f.to_string())
            .collect()
    }

    #[test]
    fn test_tenant_full_input() {
        let input: RawInput = [
            ("rent_paid", "Yes"),
            ("notice_given", "Yes"),
            ("deposit_returned", "No"),
            ("days_since", "40"),
            ("damage", "no"),
            ("rent_unpaid", "0"),
            ("written_agreement", "yes"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            clauses(FactSchema::Tenant, &input),
            vec![
                "rent_paid(user)",
                "notice_given(user)",
                "deposit_not_returned(user)",
                "days_since_vacate(user, 40)",
                "property_damage(user, no)",
                "rent_unpaid_months(user, 0)",
                "written_agreement(user, yes)",
            ]
        );
    }

    #[test]
    fn test_tenant_empty_input_uses_defaults() {
        assert_eq!(
            clauses(FactSchema::Tenant, &RawInput::new()),
            vec![
                "days_since_vacate(user, 0)",
                "property_damage(user, no)",
                "rent_unpaid_months(user, 0)",
                "written_agreement(user, no)",
            ]
        );
    }

    #[test]
    fn test_tenant_deposit_returned_yes_asserts_nothing() {
        let input = RawInput::new().with_field("deposit_returned", "Yes");
        let facts = FactSchema::Tenant.normalize(&input);
        assert!(facts.get("deposit_not_returned").is_none());
    }

    #[test]
    fn test_consumer_mapping() {
        let input: RawInput = [
            ("defective", "Yes"),
            ("days_since_purchase", "12"),
            ("bill_present", "Yes"),
            ("warranty", "No"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            clauses(FactSchema::Consumer, &input),
            vec![
                "product_defective(user)",
                "days_since_purchase(user, 12)",
                "bill_present(user)",
            ]
        );
    }

    #[test]
    fn test_contract_mapping() {
        let input: RawInput = [
            ("signed_by_both", "Yes"),
            ("essential_terms", "Yes"),
            ("days_since_breach", "abc"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            clauses(FactSchema::Contract, &input),
            vec![
                "signed_by_both(user)",
                "essential_terms_present(user)",
                "days_since_breach(user, 0)",
            ]
        );
    }

    #[test]
    fn test_traffic_mapping() {
        let input: RawInput = [
            ("recorded_speed", "40"),
            ("speed_limit", "60"),
            ("helmet", "yes"),
            ("license", "Yes"),
            ("breathalyzer", "0.0"),
            ("seatbelt", "yes"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            clauses(FactSchema::Traffic, &input),
            vec![
                "helmet(user, yes)",
                "has_license(user, yes)",
                "recorded_speed(user, 40)",
                "speed_limit(user, 60)",
                "breathalyzer(user, 0.0)",
                "seatbelt(user, yes)",
            ]
        );
    }

    #[test]
    fn test_traffic_defaults() {
        let facts = FactSchema::Traffic.normalize(&RawInput::new());
        assert!(facts.contains(&Fact::with_arg("helmet", FactValue::atom("yes"))));
        assert!(facts.contains(&Fact::with_arg("has_license", FactValue::atom("no"))));
        assert!(facts.contains(&Fact::with_arg("breathalyzer", FactValue::Float(0.0))));
        assert!(facts.contains(&Fact::with_arg("seatbelt", FactValue::atom("yes"))));
    }

    #[test]
    fn test_capitalized_answers_become_lowercase_atoms() {
        let tenant: RawInput = [("damage", "No"), ("written_agreement", "No")]
            .into_iter()
            .collect();
        let facts = FactSchema::Tenant.normalize(&tenant);
        assert!(facts.contains(&Fact::with_arg("property_damage", FactValue::atom("no"))));
        assert!(facts.contains(&Fact::with_arg("written_agreement", FactValue::atom("no"))));

        let traffic: RawInput = [("helmet", "No"), ("seatbelt", "No")].into_iter().collect();
        let facts = FactSchema::Traffic.normalize(&traffic);
        assert!(facts.contains(&Fact::with_arg("helmet", FactValue::atom("no"))));
        assert!(facts.contains(&Fact::with_arg("seatbelt", FactValue::atom("no"))));
    }

    #[test]
    fn test_cyber_clicked_link_is_two_valued() {
        let yes = FactSchema::Cyber.normalize(&RawInput::new().with_field("clicked_link", "Yes"));
        let no = FactSchema::Cyber.normalize(&RawInput::new());
        assert_eq!(yes.as_slice(), &[Fact::with_arg("clicked_link", FactValue::atom("yes"))]);
        assert_eq!(no.as_slice(), &[Fact::with_arg("clicked_link", FactValue::atom("no"))]);
    }

    #[test]
    fn test_employment_mapping() {
        let input: RawInput = [
            ("unpaid_salary_months", "3"),
            ("terminated_without_notice", "Yes"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            clauses(FactSchema::Employment, &input),
            vec![
                "unpaid_salary_months(user, 3)",
                "terminated_without_notice(user, yes)",
                "harassment(user, no)",
            ]
        );
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let input: RawInput = [("rent_paid", "Yes"), ("days_since", "x"), ("damage", "major")]
            .into_iter()
            .collect();
        for schema in [
            FactSchema::Tenant,
            FactSchema::Consumer,
            FactSchema::Contract,
            FactSchema::Traffic,
            FactSchema::Cyber,
            FactSchema::Employment,
        ] {
            assert_eq!(schema.normalize(&input), schema.normalize(&input.clone()));
        }
    }

    #[test]
    fn test_unrelated_fields_never_leak() {
        let input = RawInput::new()
            .with_field("rent_paid", "Yes")
            .with_field("otp_shared", "Yes");
        let facts = FactSchema::Consumer.normalize(&input);
        assert!(facts.get("rent_paid").is_none());
        assert!(facts.get("otp_shared").is_none());
    }
}
