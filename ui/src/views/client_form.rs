use api::{validate, ClientDetail, SaveClientRequest, UpdateClientRequest};
use dioxus::prelude::*;

use crate::auth::{sign_out, use_api, use_auth};
use crate::client_delete::ClientDelete;
use crate::components::{AppBar, Button, FieldError, Input, Label, Loading};
use crate::photo_field::PhotoField;
use crate::toast::use_toast;

/// Everything the form edits, as the user typed it. Dates stay in
/// `DD.MM.YYYY` here and are converted to ISO only when building the request.
#[derive(Clone, Debug, Default, PartialEq)]
struct FormFields {
    identification: String,
    first_name: String,
    last_name: String,
    sex: String,
    birth_date: String,
    affiliation_date: String,
    mobile_phone: String,
    other_phone: String,
    address: String,
    interest_id: String,
    personal_note: String,
    photo: String,
}

impl FormFields {
    fn from_detail(detail: &ClientDetail) -> Self {
        Self {
            identification: detail.identification.clone(),
            first_name: detail.first_name.clone(),
            last_name: detail.last_name.clone(),
            sex: detail.sex.clone(),
            birth_date: validate::date_from_iso(&detail.birth_date),
            affiliation_date: validate::date_from_iso(&detail.affiliation_date),
            mobile_phone: detail.mobile_phone.clone(),
            other_phone: detail.other_phone.clone(),
            address: detail.address.clone(),
            interest_id: detail.interest_id.clone(),
            personal_note: detail.personal_note.clone(),
            photo: detail.photo.clone(),
        }
    }

    /// Build the save payload. Call only after [`validate_form`] passed, the
    /// dates are converted unchecked here.
    fn to_request(&self, user_id: &str) -> SaveClientRequest {
        SaveClientRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            identification: self.identification.trim().to_string(),
            mobile_phone: self.mobile_phone.trim().to_string(),
            other_phone: self.other_phone.trim().to_string(),
            address: self.address.trim().to_string(),
            birth_date: validate::date_to_iso(&self.birth_date).unwrap_or_default(),
            affiliation_date: validate::date_to_iso(&self.affiliation_date).unwrap_or_default(),
            sex: self.sex.clone(),
            personal_note: self.personal_note.trim().to_string(),
            photo: self.photo.clone(),
            interest_id: self.interest_id.clone(),
            user_id: user_id.to_string(),
        }
    }

    fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct FormErrors {
    identification: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    sex: Option<String>,
    birth_date: Option<String>,
    affiliation_date: Option<String>,
    mobile_phone: Option<String>,
    other_phone: Option<String>,
    address: Option<String>,
    interest_id: Option<String>,
    personal_note: Option<String>,
}

impl FormErrors {
    fn has_any(&self) -> bool {
        [
            &self.identification,
            &self.first_name,
            &self.last_name,
            &self.sex,
            &self.birth_date,
            &self.affiliation_date,
            &self.mobile_phone,
            &self.other_phone,
            &self.address,
            &self.interest_id,
            &self.personal_note,
        ]
        .iter()
        .any(|e| e.is_some())
    }
}

fn validate_form(fields: &FormFields) -> FormErrors {
    FormErrors {
        identification: validate::validate_required("Identification", &fields.identification).err(),
        first_name: validate::validate_required("First name", &fields.first_name).err(),
        last_name: validate::validate_required("Last name", &fields.last_name).err(),
        sex: validate::validate_sex(&fields.sex).err(),
        birth_date: validate::validate_past_date("Birth date", &fields.birth_date).err(),
        affiliation_date: validate::validate_past_date("Affiliation date", &fields.affiliation_date)
            .err(),
        mobile_phone: validate::validate_phone("Mobile phone", &fields.mobile_phone).err(),
        other_phone: validate::validate_phone("Other phone", &fields.other_phone).err(),
        address: validate::validate_required("Address", &fields.address).err(),
        interest_id: validate::validate_required("Interest", &fields.interest_id).err(),
        personal_note: validate::validate_required("Personal note", &fields.personal_note).err(),
    }
}

/// Create and edit screen in one: `client_id = None` creates, `Some` loads
/// the record first and updates on save.
#[component]
pub fn ClientFormView(
    client_id: Option<String>,
    on_navigate_back: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let client = use_api();
    let toast = use_toast();

    let mut fields = use_signal(FormFields::default);
    let mut errors = use_signal(FormErrors::default);
    let mut loading_record = use_signal(|| client_id.is_some());
    let mut saving = use_signal(|| false);

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_authenticated() {
            on_navigate_login.call(());
        }
    });

    // Editing an existing client starts by fetching the record
    let load_client = client.clone();
    let load_id = client_id.clone();
    use_resource(move || {
        let client = load_client.clone();
        let id = load_id.clone();
        let mut auth = auth;
        async move {
            let Some(id) = id else { return };
            match client.get_client(&id).await {
                Ok(detail) => {
                    fields.set(FormFields::from_detail(&detail));
                    loading_record.set(false);
                }
                Err(e) if e.is_unauthorized() => {
                    sign_out(&mut auth, &client);
                    toast.error("Your session expired, please sign in again");
                }
                Err(e) => {
                    tracing::error!("load client {id}: {e}");
                    toast.error(format!("Could not load client: {e}"));
                    on_navigate_back.call(());
                }
            }
        }
    });

    let interests_client = client.clone();
    let interests = use_resource(move || {
        let client = interests_client.clone();
        async move {
            client
                .list_interests()
                .await
                .map_err(|e| e.to_string())
        }
    });

    let submit_client = client.clone();
    let submit_id = client_id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        errors.set(validate_form(&fields()));
        if errors().has_any() {
            return;
        }
        let Some(user_id) = auth().user_id().map(str::to_string) else {
            return;
        };

        let client = submit_client.clone();
        let id = submit_id.clone();
        let mut auth = auth;
        spawn(async move {
            saving.set(true);
            let request = fields().to_request(&user_id);
            let result = match &id {
                Some(id) => {
                    client
                        .update_client(&UpdateClientRequest {
                            client: request,
                            id: id.clone(),
                        })
                        .await
                }
                None => client.create_client(&request).await,
            };
            match result {
                Ok(()) => {
                    toast.success(if id.is_some() {
                        "Client updated"
                    } else {
                        "Client created"
                    });
                    on_navigate_back.call(());
                }
                Err(e) if e.is_unauthorized() => {
                    sign_out(&mut auth, &client);
                    toast.error("Your session expired, please sign in again");
                }
                Err(e) => {
                    tracing::error!("save client: {e}");
                    toast.error(format!("Could not save client: {e}"));
                    saving.set(false);
                }
            }
        });
    };

    let is_edit = client_id.is_some();
    let title = if is_edit { "Edit client" } else { "New client" };

    rsx! {
        div { class: "screen",
            AppBar {
                title: "{title}",
                on_back: move |_| on_navigate_back.call(()),
            }

            if loading_record() {
                Loading { message: "Loading client..." }
            } else {
                form { class: "form form--client", onsubmit: handle_submit,
                    PhotoField {
                        value: fields().photo,
                        on_change: move |encoded| fields.write().photo = encoded,
                    }

                    div { class: "field",
                        Label { html_for: "client-identification", "Identification" }
                        Input {
                            id: "client-identification",
                            value: fields().identification,
                            oninput: move |evt: FormEvent| fields.write().identification = evt.value(),
                        }
                        FieldError { error: errors().identification }
                    }

                    div { class: "field-row",
                        div { class: "field",
                            Label { html_for: "client-first-name", "First name" }
                            Input {
                                id: "client-first-name",
                                value: fields().first_name,
                                oninput: move |evt: FormEvent| fields.write().first_name = evt.value(),
                            }
                            FieldError { error: errors().first_name }
                        }
                        div { class: "field",
                            Label { html_for: "client-last-name", "Last name" }
                            Input {
                                id: "client-last-name",
                                value: fields().last_name,
                                oninput: move |evt: FormEvent| fields.write().last_name = evt.value(),
                            }
                            FieldError { error: errors().last_name }
                        }
                    }

                    div { class: "field",
                        Label { html_for: "client-sex", "Sex" }
                        select {
                            id: "client-sex",
                            class: "input",
                            value: fields().sex,
                            onchange: move |evt| fields.write().sex = evt.value(),
                            option { value: "", "Select..." }
                            option { value: "M", "Male" }
                            option { value: "F", "Female" }
                        }
                        FieldError { error: errors().sex }
                    }

                    div { class: "field-row",
                        div { class: "field",
                            Label { html_for: "client-birth-date", "Birth date" }
                            Input {
                                id: "client-birth-date",
                                placeholder: "DD.MM.YYYY",
                                value: fields().birth_date,
                                oninput: move |evt: FormEvent| {
                                    fields.write().birth_date = validate::sanitize_date_input(&evt.value());
                                },
                            }
                            FieldError { error: errors().birth_date }
                        }
                        div { class: "field",
                            Label { html_for: "client-affiliation-date", "Affiliation date" }
                            Input {
                                id: "client-affiliation-date",
                                placeholder: "DD.MM.YYYY",
                                value: fields().affiliation_date,
                                oninput: move |evt: FormEvent| {
                                    fields.write().affiliation_date = validate::sanitize_date_input(&evt.value());
                                },
                            }
                            FieldError { error: errors().affiliation_date }
                        }
                    }

                    div { class: "field-row",
                        div { class: "field",
                            Label { html_for: "client-mobile-phone", "Mobile phone" }
                            Input {
                                id: "client-mobile-phone",
                                r#type: "tel",
                                value: fields().mobile_phone,
                                oninput: move |evt: FormEvent| fields.write().mobile_phone = evt.value(),
                            }
                            FieldError { error: errors().mobile_phone }
                        }
                        div { class: "field",
                            Label { html_for: "client-other-phone", "Other phone" }
                            Input {
                                id: "client-other-phone",
                                r#type: "tel",
                                value: fields().other_phone,
                                oninput: move |evt: FormEvent| fields.write().other_phone = evt.value(),
                            }
                            FieldError { error: errors().other_phone }
                        }
                    }

                    div { class: "field",
                        Label { html_for: "client-address", "Address" }
                        Input {
                            id: "client-address",
                            value: fields().address,
                            oninput: move |evt: FormEvent| fields.write().address = evt.value(),
                        }
                        FieldError { error: errors().address }
                    }

                    div { class: "field",
                        Label { html_for: "client-interest", "Interest" }
                        {match &*interests.read() {
                            Some(Ok(list)) => rsx! {
                                select {
                                    id: "client-interest",
                                    class: "input",
                                    value: fields().interest_id,
                                    onchange: move |evt| fields.write().interest_id = evt.value(),
                                    option { value: "", "Select..." }
                                    for interest in list.iter() {
                                        option {
                                            key: "{interest.id}",
                                            value: "{interest.id}",
                                            "{interest.description}"
                                        }
                                    }
                                }
                            },
                            Some(Err(message)) => rsx! {
                                span { class: "field-error", "Could not load interests: {message}" }
                            },
                            None => rsx! {
                                select { id: "client-interest", class: "input", disabled: true,
                                    option { "Loading interests..." }
                                }
                            },
                        }}
                        FieldError { error: errors().interest_id }
                    }

                    div { class: "field",
                        Label { html_for: "client-note", "Personal note" }
                        textarea {
                            id: "client-note",
                            class: "input input--textarea",
                            rows: "3",
                            value: fields().personal_note,
                            oninput: move |evt| fields.write().personal_note = evt.value(),
                        }
                        FieldError { error: errors().personal_note }
                    }

                    div { class: "form-actions",
                        if let Some(id) = client_id.clone() {
                            ClientDelete {
                                client_id: id,
                                client_name: fields().display_name(),
                                on_deleted: move |_| on_navigate_back.call(()),
                            }
                        }
                        Button {
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            identification: "1234567890".into(),
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            sex: "M".into(),
            birth_date: "15.01.1990".into(),
            affiliation_date: "01.06.2020".into(),
            mobile_phone: "3001234567".into(),
            other_phone: "+57 (300) 123-4568".into(),
            address: "Calle 123 #45-67".into(),
            interest_id: "interest-1".into(),
            personal_note: "Lorem".into(),
            photo: String::new(),
        }
    }

    #[test]
    fn filled_form_passes_validation() {
        assert!(!validate_form(&filled()).has_any());
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = validate_form(&FormFields::default());
        assert!(errors.has_any());
        assert!(errors.identification.is_some());
        assert!(errors.first_name.is_some());
        assert!(errors.sex.is_some());
        assert!(errors.birth_date.is_some());
        assert!(errors.mobile_phone.is_some());
        assert!(errors.interest_id.is_some());
        assert!(errors.personal_note.is_some());
    }

    #[test]
    fn blank_personal_note_is_flagged() {
        let mut fields = filled();
        fields.personal_note = "   ".into();
        assert!(validate_form(&fields).personal_note.is_some());
    }

    #[test]
    fn impossible_birth_date_is_flagged() {
        let mut fields = filled();
        fields.birth_date = "31.02.2020".into();
        assert!(validate_form(&fields).birth_date.is_some());
    }

    #[test]
    fn phone_with_letters_is_flagged() {
        let mut fields = filled();
        fields.mobile_phone = "300abc4567".into();
        assert!(validate_form(&fields).mobile_phone.is_some());
    }

    #[test]
    fn request_converts_dates_to_iso() {
        let request = filled().to_request("user-1");
        assert!(request.birth_date.starts_with("1990-01-15T00:00:00"));
        assert!(request.affiliation_date.starts_with("2020-06-01T00:00:00"));
        assert_eq!(request.user_id, "user-1");
    }

    #[test]
    fn detail_roundtrips_through_the_form() {
        let detail = ClientDetail {
            first_name: "Ana".into(),
            last_name: "Mora".into(),
            identification: "42".into(),
            mobile_phone: "300".into(),
            other_phone: "301".into(),
            address: "x".into(),
            birth_date: "1990-01-15T00:00:00Z".into(),
            affiliation_date: "2020-06-01T00:00:00Z".into(),
            sex: "F".into(),
            personal_note: "note".into(),
            photo: String::new(),
            interest_id: "i1".into(),
        };
        let fields = FormFields::from_detail(&detail);
        assert_eq!(fields.birth_date, "15.01.1990");
        assert_eq!(fields.affiliation_date, "01.06.2020");

        let request = fields.to_request("u");
        assert_eq!(request.first_name, "Ana");
        assert!(request.birth_date.starts_with("1990-01-15"));
    }
}
