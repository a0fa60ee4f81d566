use tessera_ui::{ComponentContext, ComponentError, ComponentRef, ComponentTree, MountContent};
use tessera_ui_layout::SizeSpec;

/// Builds a `width` x `height` tree for `root`, mounts it and attaches it.
pub fn mount_tree(
    ctx: &ComponentContext,
    root: ComponentRef,
    width: f32,
    height: f32,
) -> Result<ComponentTree, ComponentError> {
    let mut tree = ComponentTree::create(ctx, Some(root))
        .size_spec(SizeSpec::exactly(width, height))
        .build()?;
    tree.attach()?;
    log::debug!("test tree {} mounted at {width}x{height}", tree.id());
    Ok(tree)
}

/// Content of the first mounted item, if any.
pub fn first_content(tree: &ComponentTree) -> Option<MountContent> {
    tree.mount_state()
        .items()
        .next()
        .map(|item| item.content().clone())
}
