//! Navigation over the menu stack.
//!
//! The stack is the root menu plus a path of item indices, each naming
//! the sub-menu launcher entered at that level. The path doubles as the
//! parent back-reference: popping truncates it, so no menu ever holds a
//! strong reference to its parent.

use tracing::{debug, trace};

use crate::input::MenuEvent;
use crate::item::{ItemCallback, MenuItem};
use crate::menu::Menu;

/// What the session should do after dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing visible changed.
    Continue,
    /// The frame is stale; redraw before waiting for input.
    Redraw,
    /// End the session.
    Exit,
}

#[derive(Debug)]
pub struct MenuStack {
    root: Menu,
    path: Vec<usize>,
}

impl MenuStack {
    pub fn new(root: Menu) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    /// Menus open, root included.
    pub fn depth(&self) -> usize {
        self.path.len() + 1
    }

    /// The menu currently rendered and receiving input.
    pub fn active(&self) -> &Menu {
        let mut menu = &self.root;
        for &idx in &self.path {
            match menu.items().get(idx) {
                Some(MenuItem::SubMenu(sub)) => menu = sub.menu(),
                _ => break,
            }
        }
        menu
    }

    pub fn active_mut(&mut self) -> &mut Menu {
        let mut menu = &mut self.root;
        for &idx in &self.path {
            if matches!(menu.items().get(idx), Some(MenuItem::SubMenu(_))) {
                if let Some(MenuItem::SubMenu(sub)) = menu.items_mut().get_mut(idx) {
                    menu = sub.menu_mut();
                } else {
                    unreachable!("checked above that item {idx} is a sub-menu")
                }
            } else {
                break;
            }
        }
        menu
    }

    /// Return to the parent menu. No-op at the root; the parent's
    /// selection is preserved as it was.
    pub fn pop(&mut self) -> bool {
        if self.path.pop().is_some() {
            debug!(depth = self.depth(), "left sub-menu");
            true
        } else {
            false
        }
    }

    /// Apply one input event to the active menu.
    pub fn dispatch(&mut self, event: MenuEvent) -> anyhow::Result<DispatchOutcome> {
        trace!(?event, depth = self.depth(), "dispatch");
        match event {
            MenuEvent::Up => Ok(moved(self.active_mut().select_previous())),
            MenuEvent::Down => Ok(moved(self.active_mut().select_next())),
            MenuEvent::Left => Ok(moved(self.move_split_cursor(-1))),
            MenuEvent::Right => Ok(moved(self.move_split_cursor(1))),
            MenuEvent::Activate => self.activate_selected(),
            MenuEvent::Back => Ok(moved(self.pop())),
            MenuEvent::Exit => Ok(DispatchOutcome::Exit),
            MenuEvent::Char(key) => {
                let menu = self.active_mut();
                if let Some(idx) = menu.shortcut_target(key) {
                    if menu.set_selection(idx) {
                        return self.activate_selected();
                    }
                }
                Ok(DispatchOutcome::Continue)
            }
        }
    }

    /// Horizontal movement is meaningful only while a split group holds
    /// focus; its cursor wraps internally and never disturbs the parent.
    fn move_split_cursor(&mut self, step: isize) -> bool {
        let menu = self.active_mut();
        let Some(idx) = menu.selected_index() else {
            return false;
        };
        match menu.items_mut().get_mut(idx) {
            Some(MenuItem::Split(split)) => {
                if step < 0 {
                    split.select_previous()
                } else {
                    split.select_next()
                }
            }
            _ => false,
        }
    }

    fn activate_selected(&mut self) -> anyhow::Result<DispatchOutcome> {
        enum Action {
            None,
            Push(usize),
            Run(ItemCallback),
            RunRadio(usize, ItemCallback),
        }

        let action = {
            let menu = self.active_mut();
            let Some(idx) = menu.selected_index() else {
                return Ok(DispatchOutcome::Continue);
            };
            match menu.items_mut().get_mut(idx) {
                Some(MenuItem::SubMenu(sub)) if sub.is_enabled() => {
                    // Entering always starts from a fresh cursor.
                    sub.menu_mut().select_first();
                    Action::Push(idx)
                }
                Some(MenuItem::Selectable(item)) if item.is_enabled() => {
                    Action::Run(item.callback())
                }
                Some(MenuItem::Checkbox(item)) if item.is_enabled() => {
                    item.toggle();
                    Action::Run(item.callback())
                }
                Some(MenuItem::Radio(item)) if item.is_enabled() => {
                    item.set_chosen(true);
                    Action::RunRadio(idx, item.callback())
                }
                Some(MenuItem::Split(split)) => match split.activate_focused() {
                    Some(cb) => Action::Run(cb),
                    None => Action::None,
                },
                _ => Action::None, // disabled or not activatable
            }
        };

        let callback = match action {
            Action::None => return Ok(DispatchOutcome::Continue),
            Action::Push(idx) => {
                self.path.push(idx);
                debug!(depth = self.depth(), "entered sub-menu");
                return Ok(DispatchOutcome::Redraw);
            }
            Action::RunRadio(idx, cb) => {
                self.active_mut().clear_sibling_radios(idx);
                cb
            }
            Action::Run(cb) => cb,
        };

        {
            let menu = self.active_mut();
            let mut f = callback.borrow_mut();
            (&mut *f)(menu)?;
            drop(f);
            // The callback may have disabled items or rewritten the item
            // list; never trust the cursor it left behind.
            menu.revalidate_selection();
        }

        let menu = self.active_mut();
        let exit = menu.take_exit_request();
        let back = menu.take_back_request();
        let _ = menu.take_redraw_request(); // activation redraws anyway
        if exit {
            return Ok(DispatchOutcome::Exit);
        }
        if back {
            self.pop();
        }
        Ok(DispatchOutcome::Redraw)
    }
}

fn moved(changed: bool) -> DispatchOutcome {
    if changed {
        DispatchOutcome::Redraw
    } else {
        DispatchOutcome::Continue
    }
}
