use tasklist_core::task::Theme;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
  pub theme:     Theme,
  pub on_toggle: Callback<()>
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(
  props: &ThemeToggleProps
) -> Html {
  let on_toggle =
    props.on_toggle.clone();
  let title = format!(
    "Switch from {} theme",
    props.theme
  );

  html! {
      <button
          id="themeToggle"
          class="theme-toggle"
          title={title}
          aria-label="Toggle theme"
          onclick={move |_| on_toggle.emit(())}
      >
          { props.theme.toggle_label() }
      </button>
  }
}
