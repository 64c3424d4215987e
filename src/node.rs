pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Storage unit of the tree: one key, its value, and two exclusively owned
/// child links. The key is never touched again after construction; only the
/// two-child removal path relocates payloads between slots.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    #[inline]
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// Detaches the minimum node of the non-empty subtree owned by `link`,
/// splicing the detached node's right child into its vacated slot.
///
/// The detached node is the leftmost of the subtree and therefore has no
/// left child; that is a consequence of the ordering invariant and is not
/// re-checked here.
pub(crate) fn detach_min<K, V>(mut link: &mut Link<K, V>) -> Box<Node<K, V>> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = &mut link.as_mut().unwrap().left;
    }
    // The loop only descends into populated links, so the slot is occupied.
    let mut min = link.take().unwrap();
    *link = min.right.take();
    min
}
