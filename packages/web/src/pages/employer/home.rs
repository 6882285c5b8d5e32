//! Employer landing page - register an organization

use dioxus::prelude::*;

use crate::graphql::{GraphQLClient, CREATE_ORGANIZATION};
use crate::routes::Route;
use crate::types::{CreateOrganizationResponse, OrganizationSummary};

/// Employer entry point: create an organization, then manage its listings.
#[component]
pub fn EmployerHome() -> Element {
    let mut name = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let nav = use_navigator();

    let handle_submit = move |_| {
        let org_name = name().trim().to_string();
        if org_name.is_empty() || is_submitting() {
            return;
        }
        let image = image_url().trim().to_string();
        let image = if image.is_empty() { None } else { Some(image) };

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            match create_organization(org_name, image).await {
                Ok(org) => {
                    nav.push(Route::EmployerDashboard {
                        organization_id: org.id,
                    });
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",
            div {
                class: "max-w-xl mx-auto px-4 py-12",

                Link {
                    to: Route::Home {},
                    class: "text-blue-600 hover:text-blue-700 text-sm mb-6 inline-block",
                    "\u{2190} Back to jobs"
                }

                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Post jobs on AI Jobs" }
                p {
                    class: "text-gray-600 mb-8",
                    "Register your organization to create and manage job listings."
                }

                if let Some(err) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-6",
                        "{err}"
                    }
                }

                form {
                    class: "bg-white border border-gray-200 rounded-xl p-6 space-y-4",
                    onsubmit: handle_submit,

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Organization name" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            placeholder: "Acme Corp",
                            class: "w-full px-4 py-2.5 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Logo URL (optional)" }
                        input {
                            r#type: "url",
                            value: "{image_url}",
                            oninput: move |e| image_url.set(e.value()),
                            placeholder: "https://example.com/logo.png",
                            class: "w-full px-4 py-2.5 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: is_submitting() || name().trim().is_empty(),
                        class: "w-full px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50",
                        if is_submitting() { "Creating..." } else { "Create organization" }
                    }
                }
            }
        }
    }
}

#[server]
async fn create_organization(
    name: String,
    image_url: Option<String>,
) -> Result<OrganizationSummary, ServerFnError> {
    let url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    let client = GraphQLClient::new(url);

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    }

    let response: CreateOrganizationResponse = client
        .mutate(CREATE_ORGANIZATION, Some(Variables { name, image_url }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.create_organization)
}
