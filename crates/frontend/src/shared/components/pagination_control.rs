use crate::shared::table::TableModel;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
        }
    }

    pub fn is_available<T: Send + Sync + 'static>(self, table: &TableModel<T>) -> bool {
        match self {
            Self::Previous => table.can_previous_page(),
            Self::Next => table.can_next_page(),
        }
    }

    /// Moves the table one page; does nothing when the move is unavailable.
    pub fn activate<T: Send + Sync + 'static>(self, table: &TableModel<T>) {
        if !self.is_available(table) {
            return;
        }
        match self {
            Self::Previous => table.previous_page(),
            Self::Next => table.next_page(),
        }
    }
}

/// PaginationControl - кнопки "Previous" / "Next" для [`TableModel`]
///
/// Каждая кнопка заблокирована, когда переход в её направлении невозможен.
#[component]
pub fn PaginationControl<T>(table: TableModel<T>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let button = move |direction: PageDirection| {
        let for_disabled = table.clone();
        let for_click = table.clone();
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                disabled=Signal::derive(move || !direction.is_available(&for_disabled))
                on_click=move |_| direction.activate(&for_click)
            >
                {direction.label()}
            </Button>
        }
    };

    view! {
        <div class="pagination-control">
            {button(PageDirection::Previous)}
            {button(PageDirection::Next)}
        </div>
    }
}
