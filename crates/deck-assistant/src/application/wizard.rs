//! Setup wizard step machine.
//!
//! The wizard walks a first-time user from an empty selection to a set of
//! groups and a layout style. States form a closed union, transitions are a
//! pure `(state, event) -> state` function, and nothing here knows how a
//! step is rendered — the UI layer owns option lists, text inputs, and
//! validation messages.
//!
//! Forward paths:
//!
//! ```text
//! Welcome ─► ChooseApproach ─┬─► ChooseGroupKind ─┬─► ChooseGroupFilter ─► PickGroupEntities
//!                            │         (custom) ──┴────────────────────► PickGroupEntities
//!                            │                                                 │
//!                            │            ┌── AnotherGroup ◄── GroupSaved ◄── NameGroup
//!                            │            ▼                        │
//!                            │    ChooseGroupKind           DoneGrouping ─► ChooseLayout
//!                            └─► PickEntities ──────────────────────────► ChooseLayout
//!                                                                              │
//!                                                            Confirm ◄─────────┘
//!                                                               │
//!                                                            Finished
//! ```
//!
//! Back edges mirror the forward paths: the entity-picking step returns to
//! the filter step or the kind step depending on the group kind, and the
//! layout step returns to the group-saved or entity-picking step depending
//! on the approach taken.

/// How the user chose to organise entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// Define named groups first, then arrange them.
    Groups,
    /// Pick entities and auto-organise.
    Simple,
}

/// What defines the group currently being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// All entities from one area.
    Area,
    /// All entities of one domain.
    Domain,
    /// A hand-picked set.
    Custom,
}

/// Where the layout step was entered from; decides its back edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOrigin {
    SimpleFlow,
    GroupFlow { last_kind: GroupKind },
}

/// The wizard's current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Welcome,
    ChooseApproach,
    ChooseGroupKind,
    ChooseGroupFilter { kind: GroupKind },
    PickGroupEntities { kind: GroupKind },
    NameGroup { kind: GroupKind },
    GroupSaved { kind: GroupKind },
    PickEntities,
    ChooseLayout { origin: LayoutOrigin },
    Confirm { origin: LayoutOrigin },
    Finished,
}

/// Everything the UI can report to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// Generic "next" where the step collects no datum.
    Advance,
    Back,
    ApproachChosen(Approach),
    GroupKindChosen(GroupKind),
    /// A filter value was picked on the filter step.
    FilterChosen,
    /// A non-empty entity selection was confirmed.
    EntitiesChosen,
    /// A non-empty group name was confirmed; the group is saved.
    NameEntered,
    AnotherGroup,
    DoneGrouping,
    LayoutChosen,
    Confirmed,
}

/// Applies one event to one state.
///
/// Events that make no sense for the current state leave it unchanged, so
/// stray UI callbacks cannot derail the flow.
pub fn transition(state: WizardState, event: WizardEvent) -> WizardState {
    use WizardEvent as E;
    use WizardState as S;

    match (state, event) {
        // ── Forward ───────────────────────────────────────────────────────────
        (S::Welcome, E::Advance) => S::ChooseApproach,
        (S::ChooseApproach, E::ApproachChosen(Approach::Groups)) => S::ChooseGroupKind,
        (S::ChooseApproach, E::ApproachChosen(Approach::Simple)) => S::PickEntities,
        // Custom selection has no filter to pick; skip straight to entities.
        (S::ChooseGroupKind, E::GroupKindChosen(GroupKind::Custom)) => {
            S::PickGroupEntities { kind: GroupKind::Custom }
        }
        (S::ChooseGroupKind, E::GroupKindChosen(kind)) => S::ChooseGroupFilter { kind },
        (S::ChooseGroupFilter { kind }, E::FilterChosen) => S::PickGroupEntities { kind },
        (S::PickGroupEntities { kind }, E::EntitiesChosen) => S::NameGroup { kind },
        (S::NameGroup { kind }, E::NameEntered) => S::GroupSaved { kind },
        (S::GroupSaved { .. }, E::AnotherGroup) => S::ChooseGroupKind,
        (S::GroupSaved { kind }, E::DoneGrouping) => S::ChooseLayout {
            origin: LayoutOrigin::GroupFlow { last_kind: kind },
        },
        (S::PickEntities, E::EntitiesChosen) => S::ChooseLayout {
            origin: LayoutOrigin::SimpleFlow,
        },
        (S::ChooseLayout { origin }, E::LayoutChosen) => S::Confirm { origin },
        (S::Confirm { .. }, E::Confirmed) => S::Finished,

        // ── Back ──────────────────────────────────────────────────────────────
        (S::ChooseApproach, E::Back) => S::Welcome,
        (S::ChooseGroupKind, E::Back) => S::ChooseApproach,
        (S::ChooseGroupFilter { .. }, E::Back) => S::ChooseGroupKind,
        (S::PickGroupEntities { kind: GroupKind::Custom }, E::Back) => S::ChooseGroupKind,
        (S::PickGroupEntities { kind }, E::Back) => S::ChooseGroupFilter { kind },
        (S::NameGroup { kind }, E::Back) => S::PickGroupEntities { kind },
        (S::GroupSaved { kind }, E::Back) => S::NameGroup { kind },
        (S::PickEntities, E::Back) => S::ChooseApproach,
        (S::ChooseLayout { origin: LayoutOrigin::SimpleFlow }, E::Back) => S::PickEntities,
        (S::ChooseLayout { origin: LayoutOrigin::GroupFlow { last_kind } }, E::Back) => {
            S::GroupSaved { kind: last_kind }
        }
        (S::Confirm { origin }, E::Back) => S::ChooseLayout { origin },

        // Anything else is out of place for the current step.
        (state, _) => state,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
