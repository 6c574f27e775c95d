//! Contact: heading, enquiry form, contact methods, support features.

pub mod form;

pub use form::{ContactForm, FormField, FormPhase};

use super::{FeatureItem, Section, SectionKind};
use crate::config::FormConfig;
use crate::editable::{EditablePath, Markup};
use crate::icon::{Icon, IconSet};
use serde::{Deserialize, Serialize};

section_config! {
    /// Contact section content.
    pub struct ContactConfig / ContactOverride {
        pub title: String,
        pub description: String,
        pub form_title: String,
        pub form_description: String,
        pub contact_methods: Vec<ContactMethod>,
        pub features: Vec<FeatureItem>,
        pub submit_text: String,
        pub success_message: String,
    }
}

/// One way to reach the sales team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub icon: String,
    pub label: String,
    pub value: String,
    pub description: String,
}

impl ContactMethod {
    pub fn new(icon: &str, label: &str, value: &str, description: &str) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            title: "Ready to Optimize Your Workforce?".into(),
            description: "Get in touch with our enterprise solutions team to discuss your specific EP WMs requirements.".into(),
            form_title: "Contact Our Enterprise Team".into(),
            form_description: "Fill out the form below and we'll get back to you within 24 hours.".into(),
            contact_methods: vec![
                ContactMethod::new("Mail", "Email", "enterprise@epwms.com", "Send us an email anytime"),
                ContactMethod::new("Phone", "Phone", "+1 (555) 123-4567", "Mon-Fri 9AM-6PM EST"),
                ContactMethod::new("MapPin", "Office", "San Francisco, CA", "Schedule an in-person meeting"),
            ],
            features: vec![
                FeatureItem::new("Clock", "24/7 Support", "Round-the-clock enterprise support"),
                FeatureItem::new("Users", "Dedicated Team", "Your own customer success manager"),
            ],
            submit_text: "Send Message".into(),
            success_message: "Thank you! We'll be in touch within 24 hours.".into(),
        }
    }
}

const MESSAGE_PLACEHOLDER: &str = "Tell us about your workforce management needs...";

impl ContactConfig {
    /// Render against a form state and the site's form settings.
    pub fn render_with(&self, form: &ContactForm, settings: &FormConfig, m: &mut Markup) {
        m.open("section", &[("id", SectionKind::Contact.id()), ("class", "contact")]);
        m.open_class("div", "container");

        m.open_class("div", "contact-header");
        m.open_class("h2", "contact-title");
        m.editable("span", "", EditablePath::key("title"), &self.title);
        m.close("h2");
        m.open_class("p", "contact-description");
        m.editable("span", "", EditablePath::key("description"), &self.description);
        m.close("p");
        m.close("div");

        m.open_class("div", "contact-grid");
        self.form_card(form, settings, m);
        self.info_column(m);
        m.close("div");

        m.close("div");
        m.close("section");
    }

    fn form_card(&self, form: &ContactForm, settings: &FormConfig, m: &mut Markup) {
        m.open_class("div", "card contact-form-card");
        m.open_class("div", "contact-form-header");
        m.open_class("h3", "contact-form-title");
        m.editable("span", "", EditablePath::key("formTitle"), &self.form_title);
        m.close("h3");
        m.open_class("p", "text-muted");
        m.editable(
            "span",
            "",
            EditablePath::key("formDescription"),
            &self.form_description,
        );
        m.close("p");
        m.close("div");

        // The client runtime swaps the form for this block after submitting,
        // so both are always present and one is hidden.
        let submitted = form.phase() == FormPhase::Submitted;
        let mut success = vec![("class", "contact-success"), ("data-form-success", "")];
        if !submitted {
            success.push(("hidden", ""));
        }
        m.open("div", &success);
        m.open_class("div", "contact-success-inner");
        m.raw(&Icon::Send.svg("icon-xl"));
        m.open_class("p", "contact-success-message");
        m.editable(
            "span",
            "",
            EditablePath::key("successMessage"),
            &self.success_message,
        );
        m.close("p");
        m.close("div");
        m.close("div");

        self.form(form, settings, m);
        m.close("div");
    }

    fn form(&self, form: &ContactForm, settings: &FormConfig, m: &mut Markup) {
        let delay = settings.submit_delay_ms.to_string();
        let mut attrs = vec![
            ("class", "contact-form"),
            ("data-contact-form", ""),
            ("data-form-id", settings.form_id.as_str()),
            ("data-submit-delay", delay.as_str()),
        ];
        if form.phase() == FormPhase::Submitted {
            attrs.push(("hidden", ""));
        }
        m.open("form", &attrs);

        let frozen = form.phase() == FormPhase::Submitting;
        m.open_class("div", "form-row");
        field(m, form, FormField::Name, "text", frozen);
        field(m, form, FormField::Email, "email", frozen);
        m.close("div");
        field(m, form, FormField::Company, "text", frozen);
        field(m, form, FormField::Message, "textarea", frozen);

        let mut button = vec![
            ("type", "submit"),
            ("class", "btn btn-primary btn-block"),
        ];
        if frozen {
            button.push(("disabled", ""));
        }
        m.open("button", &button);

        let (idle_hidden, busy_hidden): (&[(&str, &str)], &[(&str, &str)]) = if frozen {
            (&[("hidden", "")], &[])
        } else {
            (&[], &[("hidden", "")])
        };

        let mut idle = vec![("class", "btn-content"), ("data-idle", "")];
        idle.extend_from_slice(idle_hidden);
        m.open("span", &idle);
        m.raw(&Icon::Send.svg("icon-xs"));
        m.editable("span", "", EditablePath::key("submitText"), &self.submit_text);
        m.close("span");

        let mut busy = vec![("class", "btn-content"), ("data-busy", "")];
        busy.extend_from_slice(busy_hidden);
        m.open("span", &busy);
        m.element("span", "spinner", "");
        m.text("Sending...");
        m.close("span");

        m.close("button");
        m.close("form");
    }

    fn info_column(&self, m: &mut Markup) {
        m.open_class("div", "contact-info");

        m.open_class("div", "contact-methods");
        for (idx, method) in self.contact_methods.iter().enumerate() {
            let path = EditablePath::key("contactMethods").at(idx);
            m.open_class("div", "card card-muted contact-method");
            m.open_class("div", "icon-tile icon-tile-primary");
            m.raw(&IconSet::CONTACT.resolve(&method.icon).svg("icon-sm"));
            m.close("div");
            m.open("div", &[]);
            m.open_class("h4", "contact-method-label");
            m.editable("span", "", path.clone().field("label"), &method.label);
            m.close("h4");
            m.open_class("p", "contact-method-value");
            m.editable("span", "", path.clone().field("value"), &method.value);
            m.close("p");
            m.open_class("p", "text-muted text-sm");
            m.editable("span", "", path.field("description"), &method.description);
            m.close("p");
            m.close("div");
            m.close("div");
        }
        m.close("div");

        m.open_class("div", "contact-features");
        for (idx, feature) in self.features.iter().enumerate() {
            let path = EditablePath::key("features").at(idx);
            m.open_class("div", "contact-feature");
            m.open_class("div", "icon-tile icon-tile-accent");
            m.raw(&IconSet::CONTACT.resolve(&feature.icon).svg("icon-sm"));
            m.close("div");
            m.open("div", &[]);
            m.open_class("h5", "contact-feature-title");
            m.editable("span", "", path.clone().field("title"), &feature.title);
            m.close("h5");
            m.open_class("p", "text-muted text-sm");
            m.editable("span", "", path.field("description"), &feature.description);
            m.close("p");
            m.close("div");
            m.close("div");
        }
        m.close("div");

        m.close("div");
    }
}

/// Labelled input bound to one form field.
fn field(m: &mut Markup, form: &ContactForm, field: FormField, kind: &str, frozen: bool) {
    let name = field.name();
    let value = form.fields().get(field);

    m.open_class("div", "form-field");
    m.open("label", &[("for", name), ("class", "label")]);
    m.text(field.label());
    m.close("label");

    let mut attrs = vec![("id", name), ("name", name)];
    if kind == "textarea" {
        attrs.extend([
            ("rows", "4"),
            ("class", "input textarea"),
            ("placeholder", MESSAGE_PLACEHOLDER),
        ]);
    } else {
        attrs.extend([("type", kind), ("class", "input"), ("value", value)]);
    }
    if field.is_required() {
        attrs.push(("required", ""));
    }
    if frozen {
        attrs.push(("disabled", ""));
    }

    if kind == "textarea" {
        m.open("textarea", &attrs);
        m.text(value);
        m.close("textarea");
    } else {
        m.open("input", &attrs);
    }
    m.close("div");
}

impl Section for ContactConfig {
    const KIND: SectionKind = SectionKind::Contact;

    fn render(&self, m: &mut Markup) {
        self.render_with(&ContactForm::default(), &FormConfig::default(), m);
    }
}
