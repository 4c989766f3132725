//! Search bar for filtering the post list.

use leptos::prelude::*;

/// Search input with a clear button.
///
/// Every keystroke is reported through `on_input`. The clear button resets
/// the input, reports `on_clear` and puts focus back into the field.
#[component]
pub fn SearchBar(
    /// Current query, mirrored into the input.
    #[prop(into)]
    query: Signal<String>,
    /// Called with the raw input value on every change.
    #[prop(into)]
    on_input: Callback<String>,
    /// Called when the clear button is pressed.
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder text for the input.
    #[prop(default = "Search posts".to_string())]
    placeholder: String,
    /// Clear button label.
    #[prop(default = "Clear".to_string())]
    clear_label: String,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let clear = move |_| {
        on_clear.run(());
        if let Some(input) = input_ref.get() {
            input.set_value("");
            let _ = input.focus();
        }
    };

    view! {
      <div class="search" role="search">
        <input
          node_ref=input_ref
          id="search"
          type="search"
          class="search-input"
          placeholder=placeholder.clone()
          aria-label=placeholder
          prop:value=move || query.get()
          on:input=move |ev| on_input.run(event_target_value(&ev))
        />
        <button id="clearSearch" type="button" class="search-clear" on:click=clear>
          {clear_label}
        </button>
      </div>
    }
}
