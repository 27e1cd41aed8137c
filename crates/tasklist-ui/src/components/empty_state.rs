use tasklist_core::view::EmptyState;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStatePanelProps {
  pub state: EmptyState
}

#[function_component(EmptyStatePanel)]
pub fn empty_state_panel(
  props: &EmptyStatePanelProps
) -> Html {
  html! {
      <div class="empty-state">
          <div class="empty-state-icon">{ props.state.icon }</div>
          <div class="empty-state-text">{ props.state.message }</div>
      </div>
  }
}
