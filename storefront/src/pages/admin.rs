//! Admin console: subcategory table with create/edit/delete.

use inkpress_api::{ApiClient, ApiConfig};
use inkpress_commerce::admin::{FormIssue, SubcategoryDraft};
use inkpress_commerce::catalog::{category, subcategory, Subcategory};
use inkpress_commerce::ids::{CategoryId, SubcategoryId};
use inkpress_commerce::slug::slugify;
use inkpress_ui::{LoadError, TableSkeleton};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminSubcategoriesPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let subcategories = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { ApiClient::new(config).all_subcategories().await }
        }
    });
    let categories = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { ApiClient::new(config).categories().await }
        }
    });

    // Form state. The slug auto-follows the name until hand-edited.
    let draft = RwSignal::new(SubcategoryDraft::default());
    let slug_touched = RwSignal::new(false);
    let issues = RwSignal::new(Vec::<FormIssue>::new());
    let saving = RwSignal::new(false);
    let save_error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);

    // Deletes are two-click: the first click arms, the second confirms.
    let delete_armed = RwSignal::new(None::<SubcategoryId>);
    let delete_error = RwSignal::new(None::<String>);

    let reset_form = move || {
        draft.set(SubcategoryDraft::default());
        slug_touched.set(false);
        issues.set(Vec::new());
        save_error.set(None);
    };

    let save = {
        let config = config.clone();
        move || {
            let current = draft.get_untracked();
            let found = current.validate();
            if !found.is_empty() {
                issues.set(found);
                return;
            }
            issues.set(Vec::new());
            saving.set(true);
            save_error.set(None);
            saved.set(false);
            let config = config.clone();
            spawn_local(async move {
                let client = ApiClient::new(config);
                let result = if current.is_edit() {
                    client.update_subcategory(&current).await
                } else {
                    client.create_subcategory(&current).await
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        saved.set(true);
                        reset_form();
                        subcategories.refetch();
                    }
                    Err(e) => {
                        // Keep the form as typed so nothing is lost.
                        log::error!("saving subcategory failed: {e}");
                        save_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let delete = {
        let config = config.clone();
        move |id: SubcategoryId| {
            if delete_armed.get_untracked().as_ref() != Some(&id) {
                delete_armed.set(Some(id));
                return;
            }
            delete_armed.set(None);
            delete_error.set(None);
            let config = config.clone();
            spawn_local(async move {
                match ApiClient::new(config).delete_subcategory(&id).await {
                    Ok(()) => subcategories.refetch(),
                    Err(e) => {
                        log::error!("deleting subcategory failed: {e}");
                        delete_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let edit = move |sub: &Subcategory| {
        draft.set(SubcategoryDraft::from_subcategory(sub));
        slug_touched.set(true);
        issues.set(Vec::new());
        saved.set(false);
    };

    let issue_for = move |field: &'static str| {
        issues
            .get()
            .into_iter()
            .find(|i| i.field == field)
            .map(|i| view! { <p class="form-error">{i.message}</p> })
    };

    view! {
        <h2>"Subcategories"</h2>
        <div class="admin-layout">
            <section>
                {move || {
                    delete_error
                        .get()
                        .map(|m| view! { <p class="form-error">{m}</p> })
                }}
                <Suspense fallback=move || view! { <TableSkeleton/> }>
                    {
                        let delete = delete.clone();
                        move || {
                            let delete = delete.clone();
                            subcategories
                                .get()
                                .map(|res| match res.take() {
                                    Ok(mut items) => {
                                        subcategory::sort_by_position(&mut items);
                                        view! {
                                            <table class="admin-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Slug"</th>
                                                        <th></th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {items
                                                        .into_iter()
                                                        .map(|sub| {
                                                            let delete = delete.clone();
                                                            let delete_id = sub.id.clone();
                                                            let armed_id = sub.id.clone();
                                                            let row = sub.clone();
                                                            view! {
                                                                <tr>
                                                                    <td>{sub.name.clone()}</td>
                                                                    <td>{sub.slug.clone()}</td>
                                                                    <td>
                                                                        <button
                                                                            class="button-secondary"
                                                                            on:click=move |_| edit(&row)
                                                                        >
                                                                            "Edit"
                                                                        </button>
                                                                        " "
                                                                        <button
                                                                            class="button-danger"
                                                                            on:click=move |_| delete(delete_id.clone())
                                                                        >
                                                                            {move || {
                                                                                if delete_armed.get().as_ref()
                                                                                    == Some(&armed_id)
                                                                                {
                                                                                    "Click again to delete"
                                                                                } else {
                                                                                    "Delete"
                                                                                }
                                                                            }}
                                                                        </button>
                                                                    </td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        }
                                            .into_any()
                                    }
                                    Err(e) => {
                                        view! {
                                            <LoadError
                                                message=e.to_string()
                                                on_retry=Callback::new(move |_: ()| {
                                                    subcategories.refetch()
                                                })
                                            />
                                        }
                                            .into_any()
                                    }
                                })
                        }
                    }
                </Suspense>
            </section>

            <section>
                <h3>{move || {
                    if draft.get().is_edit() { "Edit subcategory" } else { "New subcategory" }
                }}</h3>

                <div class="form-field">
                    <label for="sub-name">"Name"</label>
                    <input
                        id="sub-name"
                        type="text"
                        prop:value=move || draft.get().name
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            draft.update(|d| {
                                if !slug_touched.get_untracked() {
                                    d.slug = slugify(&name);
                                }
                                d.name = name;
                            });
                        }
                    />
                    {move || issue_for("name")}
                </div>

                <div class="form-field">
                    <label for="sub-slug">"Slug"</label>
                    <input
                        id="sub-slug"
                        type="text"
                        prop:value=move || draft.get().slug
                        on:input=move |ev| {
                            slug_touched.set(true);
                            draft.update(|d| d.slug = event_target_value(&ev));
                        }
                    />
                    {move || issue_for("slug")}
                </div>

                <div class="form-field">
                    <label for="sub-category">"Parent category"</label>
                    <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                        {move || {
                            categories
                                .get()
                                .map(|res| match res.take() {
                                    Ok(mut items) => {
                                        category::sort_by_position(&mut items);
                                        view! {
                                            <select
                                                id="sub-category"
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    draft.update(|d| {
                                                        d.category_id = (!value.is_empty())
                                                            .then(|| CategoryId::new(value.clone()));
                                                    });
                                                }
                                            >
                                                <option value="">"Choose a category"</option>
                                                {items
                                                    .into_iter()
                                                    .map(|c| {
                                                        let id = c.id.clone();
                                                        view! {
                                                            <option
                                                                value=c.id.as_str().to_string()
                                                                selected=move || {
                                                                    draft.get().category_id.as_ref() == Some(&id)
                                                                }
                                                            >
                                                                {c.name}
                                                            </option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                        }
                                            .into_any()
                                    }
                                    Err(e) => {
                                        view! { <p class="form-error">{e.to_string()}</p> }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                    {move || issue_for("category_id")}
                </div>

                <div class="form-field">
                    <label for="sub-description">"Description"</label>
                    <textarea
                        id="sub-description"
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            draft.update(|d| d.description = event_target_value(&ev))
                        }
                    ></textarea>
                </div>

                <div class="form-field">
                    <label for="sub-image">"Image URL"</label>
                    <input
                        id="sub-image"
                        type="text"
                        prop:value=move || draft.get().image_url
                        on:input=move |ev| {
                            draft.update(|d| d.image_url = event_target_value(&ev))
                        }
                    />
                    {move || issue_for("image_url")}
                </div>

                {move || {
                    save_error.get().map(|m| view! { <p class="form-error">{m}</p> })
                }}
                {move || {
                    saved.get().then(|| view! { <p class="form-success">"Saved."</p> })
                }}

                <div class="modal-actions">
                    <button class="button-secondary" on:click=move |_| reset_form()>
                        "Clear"
                    </button>
                    {
                        let save = save.clone();
                        view! {
                            <button
                                class="button-primary"
                                disabled=move || saving.get()
                                on:click=move |_| save()
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        }
                    }
                </div>
            </section>
        </div>
    }
}
