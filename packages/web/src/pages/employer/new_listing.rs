//! New listing form page

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::graphql::{GraphQLClient, CREATE_JOB_LISTING};
use crate::routes::Route;
use crate::types::CreateJobListingResponse;

/// Form payload for a new listing; enum fields hold GraphQL wire values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJobListingForm {
    pub title: String,
    pub description: String,
    pub city: Option<String>,
    pub state_abbreviation: Option<String>,
    pub wage: Option<i32>,
    pub wage_interval: Option<String>,
    pub wage_currency: Option<String>,
    pub experience_level: String,
    pub job_type: String,
    pub location_requirement: String,
}

/// Create a new draft listing for the organization.
#[component]
pub fn NewJobListing(organization_id: String) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state_abbreviation = use_signal(String::new);
    let mut wage = use_signal(String::new);
    let mut wage_interval = use_signal(|| "yearly".to_string());
    let mut wage_currency = use_signal(|| "USD".to_string());
    let mut experience_level = use_signal(|| "JUNIOR".to_string());
    let mut job_type = use_signal(|| "FULL_TIME".to_string());
    let mut location_requirement = use_signal(|| "IN_OFFICE".to_string());
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let nav = use_navigator();

    let dashboard_route = Route::EmployerDashboard {
        organization_id: organization_id.clone(),
    };

    let handle_submit = {
        let organization_id = organization_id.clone();
        move |_| {
            if is_submitting() {
                return;
            }
            let form_title = title().trim().to_string();
            let form_description = description().trim().to_string();
            if form_title.is_empty() || form_description.is_empty() {
                error.set(Some("Title and description are required".to_string()));
                return;
            }

            let wage_value = wage().trim().parse::<i32>().ok().filter(|w| *w > 0);
            let form = NewJobListingForm {
                title: form_title,
                description: form_description,
                city: non_empty(city()),
                state_abbreviation: non_empty(state_abbreviation()),
                wage: wage_value,
                wage_interval: wage_value.is_some().then(|| wage_interval()),
                wage_currency: wage_value.is_some().then(|| wage_currency()),
                experience_level: experience_level(),
                job_type: job_type(),
                location_requirement: location_requirement(),
            };
            let organization_id = organization_id.clone();

            spawn(async move {
                is_submitting.set(true);
                error.set(None);

                match create_listing(organization_id.clone(), form).await {
                    Ok(()) => {
                        nav.push(Route::EmployerDashboard { organization_id });
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }

                is_submitting.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            div {
                class: "max-w-xl mx-auto px-4 py-8",

                Link {
                    to: dashboard_route,
                    class: "text-blue-600 hover:text-blue-700 text-sm mb-6 inline-block",
                    "\u{2190} Back to dashboard"
                }

                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "New Job Listing" }

                if let Some(err) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-6",
                        "{err}"
                    }
                }

                form {
                    class: "bg-white border border-gray-200 rounded-xl p-6 space-y-4",
                    onsubmit: handle_submit,

                    FormField { label: "Title",
                        input {
                            r#type: "text",
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                            placeholder: "Senior Rust Engineer",
                            class: "w-full px-4 py-2.5 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }
                    }

                    FormField { label: "Description",
                        textarea {
                            value: "{description}",
                            oninput: move |e| description.set(e.value()),
                            rows: 6,
                            placeholder: "What the role involves...",
                            class: "w-full px-4 py-2.5 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }
                    }

                    div {
                        class: "grid grid-cols-2 gap-4",
                        FormField { label: "City",
                            input {
                                r#type: "text",
                                value: "{city}",
                                oninput: move |e| city.set(e.value()),
                                class: "w-full px-4 py-2.5 border border-gray-300 rounded-lg"
                            }
                        }
                        FormField { label: "State",
                            input {
                                r#type: "text",
                                value: "{state_abbreviation}",
                                oninput: move |e| state_abbreviation.set(e.value()),
                                placeholder: "MN",
                                class: "w-full px-4 py-2.5 border border-gray-300 rounded-lg"
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-3 gap-4",
                        FormField { label: "Wage",
                            input {
                                r#type: "number",
                                value: "{wage}",
                                oninput: move |e| wage.set(e.value()),
                                placeholder: "120000",
                                class: "w-full px-4 py-2.5 border border-gray-300 rounded-lg"
                            }
                        }
                        FormField { label: "Interval",
                            select {
                                onchange: move |e| wage_interval.set(e.value()),
                                class: "w-full px-3 py-2.5 border border-gray-300 rounded-lg bg-white",
                                option { value: "yearly", "Yearly" }
                                option { value: "monthly", "Monthly" }
                                option { value: "hourly", "Hourly" }
                            }
                        }
                        FormField { label: "Currency",
                            select {
                                onchange: move |e| wage_currency.set(e.value()),
                                class: "w-full px-3 py-2.5 border border-gray-300 rounded-lg bg-white",
                                option { value: "USD", "USD" }
                                option { value: "EUR", "EUR" }
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-3 gap-4",
                        FormField { label: "Experience",
                            select {
                                onchange: move |e| experience_level.set(e.value()),
                                class: "w-full px-3 py-2.5 border border-gray-300 rounded-lg bg-white",
                                option { value: "JUNIOR", "Junior" }
                                option { value: "MID_LEVEL", "Mid-level" }
                                option { value: "SENIOR", "Senior" }
                                option { value: "C_LEVEL", "C-level" }
                            }
                        }
                        FormField { label: "Type",
                            select {
                                onchange: move |e| job_type.set(e.value()),
                                class: "w-full px-3 py-2.5 border border-gray-300 rounded-lg bg-white",
                                option { value: "FULL_TIME", "Full-time" }
                                option { value: "PART_TIME", "Part-time" }
                                option { value: "CONTRACT", "Contract" }
                                option { value: "INTERNSHIP", "Internship" }
                            }
                        }
                        FormField { label: "Location",
                            select {
                                onchange: move |e| location_requirement.set(e.value()),
                                class: "w-full px-3 py-2.5 border border-gray-300 rounded-lg bg-white",
                                option { value: "IN_OFFICE", "In office" }
                                option { value: "HYBRID", "Hybrid" }
                                option { value: "REMOTE", "Remote" }
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: is_submitting(),
                        class: "w-full px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50",
                        if is_submitting() { "Creating..." } else { "Create draft listing" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FormFieldProps {
    label: &'static str,
    children: Element,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            {props.children}
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[server]
async fn create_listing(
    organization_id: String,
    form: NewJobListingForm,
) -> Result<(), ServerFnError> {
    let url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    let client = GraphQLClient::new(url);

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct InputVars {
        title: String,
        description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        city: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        state_abbreviation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        wage: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        wage_interval: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        wage_currency: Option<String>,
        experience_level: String,
        job_type: String,
        location_requirement: String,
    }

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        organization_id: String,
        input: InputVars,
    }

    let variables = Variables {
        organization_id,
        input: InputVars {
            title: form.title,
            description: form.description,
            city: form.city,
            state_abbreviation: form.state_abbreviation,
            wage: form.wage,
            wage_interval: form.wage_interval,
            wage_currency: form.wage_currency,
            experience_level: form.experience_level,
            job_type: form.job_type,
            location_requirement: form.location_requirement,
        },
    };

    let _: CreateJobListingResponse = client
        .mutate(CREATE_JOB_LISTING, Some(variables))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}
