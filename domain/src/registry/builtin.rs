//! Built-in legal domain catalog
//!
//! Static content for the six shipped domains, in the order they are listed
//! to users.

use super::entities::Domain;
use crate::core::error::DomainError;
use crate::facts::FactSchema;

pub(super) fn builtin_domains() -> Result<Vec<Domain>, DomainError> {
    Ok(vec![
        tenant()?,
        consumer()?,
        contract()?,
        traffic()?,
        cyber()?,
        employment()?,
    ])
}

fn tenant() -> Result<Domain, DomainError> {
    Domain::builder(
        "tenant",
        "Tenant–Landlord Disputes",
        FactSchema::Tenant,
        "tenant_rules.pl",
    )
    .query("Eviction Invalid", "eviction_invalid")
    .query("Refund Claim", "tenant_refund_claim")
    .query("Month-to-Month Tenancy", "tenancy_month_to_month")
    .query("Landlord Deduction Allowed", "landlord_can_deduct")
    .query("Eviction Allowed", "eviction_allowed")
    .query("Deposit Rights", "tenant_rights_deposit")
    .advice(
        "Eviction Invalid",
        "Eviction cannot proceed because the tenant has fulfilled essential obligations such as paying rent and giving proper notice. The landlord is advised to resolve the matter amicably or seek mediation.",
    )
    .advice(
        "Refund Claim",
        "Since the deposit has not been returned within the statutory period, the tenant may request a refund in writing or escalate to rent authorities.",
    )
    .advice(
        "Month-to-Month Tenancy",
        "No written agreement means tenancy operates month-to-month. Both parties should consider formalizing the agreement to avoid disputes.",
    )
    .advice(
        "Landlord Deduction Allowed",
        "Deductions from the security deposit are allowed only when actual damage exists. A written deduction statement is recommended.",
    )
    .advice(
        "Eviction Allowed",
        "Eviction is permissible because rent remains unpaid for an extended period. The landlord may issue formal notice while the tenant should clear dues or negotiate.",
    )
    .advice(
        "Deposit Rights",
        "Tenant is entitled to full refund since no damage exists and dues are clear. A written refund request is recommended.",
    )
    .steps_both(
        "Eviction Invalid",
        &[
            "Attempt an amicable resolution with landlord (record discussions).",
            "If rejected, consider mediation or a written request through a legal aid clinic.",
        ],
        &[
            "Verify rent receipts and notice records; gather documentary proof.",
            "If doubt persists, consult legal aid or landlord association.",
        ],
    )
    .steps_both(
        "Refund Claim",
        &[
            "Send a formal written refund request to the landlord.",
            "If ignored, file a complaint with the rent authority.",
        ],
        &[
            "Request deposit breakdown and verify deductions.",
            "Gather photo evidence of the property condition.",
        ],
    )
    .steps_both(
        "Month-to-Month Tenancy",
        &[
            "Consider signing a formal written agreement.",
            "Keep written proof of all payments.",
        ],
        &["Store original agreement safely for future reference."],
    )
    .steps_both(
        "Landlord Deduction Allowed",
        &[
            "Request itemized deduction summary.",
            "Seek mediation if deductions feel excessive.",
        ],
        &["Demand full deposit refund with written request."],
    )
    .steps_both(
        "Eviction Allowed",
        &[
            "Clear dues immediately or negotiate repayment.",
            "Seek legal advice to halt eviction.",
        ],
        &["Maintain proof of all payments and notices."],
    )
    .steps_both(
        "Deposit Rights",
        &[
            "Send written refund request.",
            "File complaint if deposit is withheld.",
        ],
        &["Request deduction breakdown from landlord."],
    )
    .build()
}

fn consumer() -> Result<Domain, DomainError> {
    Domain::builder(
        "consumer",
        "Consumer Rights",
        FactSchema::Consumer,
        "consumer_rules.pl",
    )
    .query("Refund Allowed", "refund_allowed")
    .query("Replacement Allowed", "replacement_allowed")
    .query("Complaint Possible", "consumer_complaint_possible")
    .advice(
        "Refund Allowed",
        "Product defect qualifies for refund. Contact seller with receipt.",
    )
    .advice(
        "Replacement Allowed",
        "Defect covered under policy. Request replacement.",
    )
    .advice(
        "Complaint Possible",
        "Seller is uncooperative. File consumer complaint.",
    )
    .steps_both(
        "Refund Allowed",
        &[
            "Request refund with bill copy.",
            "Escalate to grievance cell if refused.",
        ],
        &["Check warranty or repair policies."],
    )
    .steps_both(
        "Replacement Allowed",
        &["Request replacement formally.", "Escalate if delayed."],
        &["Document defect and check warranty terms."],
    )
    .steps_both(
        "Complaint Possible",
        &["File complaint with evidence.", "Attach bill and product proof."],
        &["Try negotiating with seller."],
    )
    .build()
}

fn contract() -> Result<Domain, DomainError> {
    Domain::builder(
        "contract",
        "Contract Disputes",
        FactSchema::Contract,
        "contract_rules.pl",
    )
    .query("Contract Valid", "contract_valid")
    .query("Breach of Contract", "breach_of_contract")
    .query("Remedy Available", "contract_remedy")
    .advice(
        "Contract Valid",
        "Contract contains essential terms and is valid.",
    )
    .advice("Breach of Contract", "A term was violated. Issue notice.")
    .advice(
        "Remedy Available",
        "Remedies include compensation or mediation.",
    )
    .steps_both(
        "Contract Valid",
        &["Store signed contract safely.", "Record all communication."],
        &["Clarify missing terms."],
    )
    .steps_both(
        "Breach of Contract",
        &["Send legal notice.", "Gather evidence before action."],
        &["Recheck contract terms."],
    )
    .steps_both(
        "Remedy Available",
        &["Seek compensation or mediation."],
        &["Attempt renegotiation."],
    )
    .build()
}

fn traffic() -> Result<Domain, DomainError> {
    Domain::builder(
        "traffic",
        "Traffic Violations",
        FactSchema::Traffic,
        "traffic_rules.pl",
    )
    .query("Helmet Missing", "helmet_missing")
    .query("License Invalid", "license_invalid")
    .query("Overspeeding", "overspeeding")
    .query("Drunk Driving", "drunk_driving")
    .query("Seatbelt Missing", "seatbelt_missing")
    .query("Serious Traffic Offence", "serious_traffic_offence")
    .advice(
        "Helmet Missing",
        "Helmet mandatory; wearing avoids penalties.",
    )
    .advice(
        "License Invalid",
        "Driving without license is serious offence.",
    )
    .advice("Overspeeding", "Follow posted speed limits.")
    .advice("Drunk Driving", "Major offence; do not drive.")
    .advice("Seatbelt Missing", "Seatbelt is mandatory.")
    .advice("Serious Traffic Offence", "Multiple violations detected.")
    .steps_both(
        "Helmet Missing",
        &["Wear helmet."],
        &["Continue following safety rules."],
    )
    .steps_both(
        "License Invalid",
        &["Renew license."],
        &["Keep license available."],
    )
    .steps_both("Overspeeding", &["Pay fine."], &["Maintain safe speed."])
    .steps_both(
        "Drunk Driving",
        &["Seek legal help."],
        &["Drive responsibly."],
    )
    .steps_both(
        "Seatbelt Missing",
        &["Wear seatbelt."],
        &["Continue compliance."],
    )
    .steps_both(
        "Serious Traffic Offence",
        &["Consult traffic lawyer."],
        &["Avoid violations."],
    )
    .build()
}

fn cyber() -> Result<Domain, DomainError> {
    Domain::builder(
        "cyber",
        "Cyber Fraud / Online Crime",
        FactSchema::Cyber,
        "cyber_rules.pl",
    )
    .query("OTP Shared", "shared_otp")
    .query("Clicked Phishing Link", "clicked_phishing_link")
    .query("Unauthorized Transfer", "unauthorized_transfer")
    .query("Identity Theft Risk", "identity_theft_risk")
    .query("File Cyber Complaint", "file_cyber_complaint")
    .advice("OTP Shared", "OTP sharing exposes you to fraud.")
    .advice(
        "Clicked Phishing Link",
        "Reset passwords and scan device.",
    )
    .advice(
        "Unauthorized Transfer",
        "Report immediately and block account.",
    )
    .advice(
        "Identity Theft Risk",
        "Identity theft likely; take action.",
    )
    .advice(
        "File Cyber Complaint",
        "File cyber complaint with evidence.",
    )
    .steps_both(
        "OTP Shared",
        &["Change passwords immediately."],
        &["Maintain hygiene."],
    )
    .steps_both(
        "Clicked Phishing Link",
        &["Scan device; reset credentials."],
        &["Avoid unknown links."],
    )
    .steps_both(
        "Unauthorized Transfer",
        &["Freeze account; file report."],
        &["Monitor activity."],
    )
    .steps_both(
        "Identity Theft Risk",
        &["File complaint; freeze cards."],
        &["Maintain cyber safety."],
    )
    .steps_both(
        "File Cyber Complaint",
        &["Submit evidence to cyber cell."],
        &["Monitor accounts."],
    )
    .build()
}

fn employment() -> Result<Domain, DomainError> {
    Domain::builder(
        "employment",
        "Employment / Workplace Issues",
        FactSchema::Employment,
        "employment_rules.pl",
    )
    .query("Salary Due", "salary_due")
    .query("Wrongful Termination", "wrongful_termination")
    .query("Harassment Reported", "harassment_reported")
    .query("Remedy Available", "employment_remedy")
    .advice("Salary Due", "Unpaid salary is a major labour violation.")
    .advice(
        "Wrongful Termination",
        "Termination without notice may be wrongful.",
    )
    .advice(
        "Harassment Reported",
        "Document and report to HR/legal cell.",
    )
    .advice(
        "Remedy Available",
        "Compensation or reinstatement possible.",
    )
    .steps_both(
        "Salary Due",
        &["Collect proof; file complaint."],
        &["Ask employer for clarification."],
    )
    .steps_both(
        "Wrongful Termination",
        &["Send grievance notice."],
        &["Check contract clauses."],
    )
    .steps_both(
        "Harassment Reported",
        &["Document & report."],
        &["Follow HR procedures."],
    )
    .steps_both(
        "Remedy Available",
        &["Seek mediation/legal help."],
        &["Try negotiation."],
    )
    .build()
}
