//! Integration tests for rendering the agreement end to end.

use chrono::NaiveDate;
use housing_core::collaborators::{TemplateLoader, Validator};
use housing_core::error::HousingError;
use housing_core::models::person::{AgentOrLandlord, Person};
use housing_core::models::tenancy::{NO_LETTING_AGENT, Tenancy};
use housing_core::models::tri_state::TriState;
use housing_forms::{
    DocumentGenerationService, FormsConfig, JsonTemplateLoader, ModelTenancyFieldExtractor,
    ModelTenancyValidator, TeraDocumentRenderer,
};

fn service() -> DocumentGenerationService<ModelTenancyFieldExtractor, TeraDocumentRenderer> {
    DocumentGenerationService::new(
        ModelTenancyFieldExtractor::new(),
        TeraDocumentRenderer::built_in().unwrap(),
        FormsConfig::default(),
    )
}

fn submitted_tenancy() -> Tenancy {
    Tenancy {
        tenants: vec![Person {
            name: "Ann Tenant".into(),
            email: "ann@example.com".into(),
            ..Default::default()
        }],
        landlords: vec![AgentOrLandlord {
            name: "Bob Landlord".into(),
            registration_number: "12345".into(),
            ..Default::default()
        }],
        has_letting_agent: NO_LETTING_AGENT.into(),
        communications_agreement: "HARDCOPY".into(),
        property_address: "1 High Street, Edinburgh".into(),
        hmo_property: TriState::No,
        tenancy_start_date: NaiveDate::from_ymd_opt(2018, 3, 1),
        rent_amount: "650".into(),
        rent_payment_frequency: "CALENDAR_MONTHLY".into(),
        rent_payable_in_advance: TriState::Yes,
        tenancy_deposit_scheme_administrator: "mydeposits Scotland".into(),
        ..Default::default()
    }
}

fn render(tenancy: &Tenancy) -> String {
    let document = service().generate(tenancy).unwrap();
    String::from_utf8(document.bytes).unwrap()
}

#[test]
fn generated_document_is_named_after_the_stem() {
    let document = service().generate(&submitted_tenancy()).unwrap();
    assert_eq!(document.filename, "your-tenancy-agreement.txt");
    assert_eq!(document.content_type, "text/plain; charset=utf-8");
    assert!(!document.bytes.is_empty());
}

#[test]
fn custom_stem_is_used() {
    let service = DocumentGenerationService::new(
        ModelTenancyFieldExtractor::new(),
        TeraDocumentRenderer::built_in().unwrap(),
        FormsConfig {
            filename_stem: "agreement".into(),
            ..Default::default()
        },
    );
    let document = service.generate(&submitted_tenancy()).unwrap();
    assert_eq!(document.filename, "agreement.txt");
}

#[test]
fn document_contains_extracted_values() {
    let text = render(&submitted_tenancy());

    assert!(text.contains("Name (1): Ann Tenant"));
    assert!(text.contains("Registration number (Landlord 1):  [12345]"));
    assert!(text.contains("[X] Notices will be given in hard copy."));
    assert!(text.contains("The tenancy starts on 01/03/2018."));
    assert!(text.contains("The rent is £650 per calendar month"));
    assert!(text.contains("www.mydepositsscotland.co.uk"));
    assert!(text.contains("The Property is not a House in Multiple Occupation."));
}

#[test]
fn hidden_sections_are_left_out() {
    let text = render(&submitted_tenancy());

    assert!(!text.contains("2. LETTING AGENT"));
    assert!(!text.contains("Where notices are given by email"));
    assert!(!text.contains("HMO 24 hour contact number"));
    assert!(text.contains("the Landlord must obtain"));
}

#[test]
fn shown_sections_are_included() {
    let mut tenancy = submitted_tenancy();
    tenancy.has_letting_agent = "letting-agent-yes".into();
    tenancy.letting_agent = Some(AgentOrLandlord {
        name: "Lets R Us".into(),
        ..Default::default()
    });
    tenancy.communications_agreement = "EMAIL".into();
    tenancy.hmo_property = TriState::Yes;
    tenancy.hmo24_contact_number = "0800 000 000".into();

    let text = render(&tenancy);

    assert!(text.contains("2. LETTING AGENT"));
    assert!(text.contains("Name: Lets R Us"));
    assert!(text.contains("Where notices are given by email"));
    assert!(text.contains("HMO 24 hour contact number: 0800 000 000"));
    assert!(!text.contains("the Landlord must obtain"));
}

#[test]
fn blank_template_renders_without_error() {
    let tenancy = JsonTemplateLoader::built_in().load_template().unwrap();
    let text = render(&tenancy);
    assert!(text.starts_with("MODEL PRIVATE RESIDENTIAL TENANCY AGREEMENT"));
}

#[test]
fn blank_template_does_not_pass_validation() {
    let tenancy = JsonTemplateLoader::built_in().load_template().unwrap();
    let err = ModelTenancyValidator::new().validate(&tenancy).unwrap_err();
    assert!(matches!(err, HousingError::Validation { .. }));
}

#[test]
fn submitted_tenancy_passes_validation() {
    assert!(
        ModelTenancyValidator::new()
            .validate(&submitted_tenancy())
            .is_ok()
    );
}
