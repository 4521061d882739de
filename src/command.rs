#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CloseComments,
  FocusForm,
  FocusResults,
  HideHelp,
  None,
  OpenComments,
  OpenPost,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  SubmitSearch,
}
